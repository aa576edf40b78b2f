//! End-to-End CLI Integration Tests
//!
//! Tests the complete stack VM through the vm_cli Driver API.
//! This is the highest level integration test - program to rendered output.

use core_types::Exception;
use vm_cli::{sample_program, Cli, CliError, Driver};

use clap::Parser as _;

/// Test: Default CLI configuration aborts the sample program
#[test]
fn test_e2e_default_cli_aborts() {
    let cli = Cli::try_parse_from(["stack-vm"]).expect("no args is valid");
    let mut driver = Driver::new()
        .with_trace(cli.trace())
        .with_quiet(cli.quiet)
        .with_policy(cli.policy());

    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = driver.run(&sample_program(), &mut out, &mut err);

    match result {
        Err(CliError::Fault(fault)) => assert_eq!(fault.exception, Exception::DivisionByZero),
        other => panic!("Expected division fault, got {:?}", other),
    }

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Stack: \n  [empty]\n(PUSH) Stack: \n  69\n"));
    assert!(out.ends_with("(PUSH) Stack: \n  894\n  0\n"));
    assert!(String::from_utf8(err)
        .unwrap()
        .starts_with("Exception activated: EXCEPTION_DIVISION_BY_ZERO\n"));
}

/// Test: --continue --no-trace prints only the initial and final dumps
#[test]
fn test_e2e_continue_without_trace() {
    let cli = Cli::try_parse_from(["stack-vm", "--continue", "--no-trace"]).unwrap();
    let mut driver = Driver::new()
        .with_trace(cli.trace())
        .with_quiet(cli.quiet)
        .with_policy(cli.policy());

    let mut out = Vec::new();
    let mut err = Vec::new();
    let faults = driver
        .run(&sample_program(), &mut out, &mut err)
        .expect("continue policy never aborts");

    assert_eq!(faults.len(), 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Stack: \n  [empty]\nStack: \n  894\n  0\n"
    );
}
