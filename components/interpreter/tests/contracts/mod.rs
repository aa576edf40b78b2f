//! Contract tests for interpreter API
//!
//! These tests verify the two operations exposed to collaborators:
//! `execute` as the sole mutator and `snapshot` as the sole accessor.

use bytecode_system::{Instruction, RawInstruction};
use core_types::{Exception, Word, STACK_CAPACITY};
use interpreter::{execute, execute_raw, Stack, VM};

fn stack_of(values: &[Word]) -> Stack {
    let mut stack = Stack::new();
    for value in values {
        stack.push(*value).unwrap();
    }
    stack
}

/// Every failing call leaves the snapshot unchanged
#[test]
fn test_atomicity_under_failure_contract() {
    let mut full = Stack::new();
    for _ in 0..STACK_CAPACITY {
        full.push(1).unwrap();
    }

    let cases: Vec<(Stack, Instruction, Exception)> = vec![
        (full, Instruction::Push(5), Exception::StackOverflow),
        (Stack::new(), Instruction::Add, Exception::StackUnderflow),
        (stack_of(&[1]), Instruction::Subtract, Exception::StackUnderflow),
        (stack_of(&[1]), Instruction::Multiply, Exception::StackUnderflow),
        (stack_of(&[]), Instruction::Divide, Exception::StackUnderflow),
        (stack_of(&[3, 0]), Instruction::Divide, Exception::DivisionByZero),
    ];

    for (mut stack, instruction, expected) in cases {
        let before = stack.snapshot();
        assert_eq!(execute(&mut stack, &instruction), expected);
        assert_eq!(stack.snapshot(), before, "{} mutated the stack", instruction);
    }

    let mut stack = stack_of(&[9, 9]);
    let before = stack.snapshot();
    assert_eq!(
        execute_raw(&mut stack, RawInstruction::new(77, 1)),
        Exception::IllegalInstruction
    );
    assert_eq!(stack.snapshot(), before);
}

/// Successful instructions change the size by exactly one
#[test]
fn test_net_size_change_contract() {
    let mut stack = stack_of(&[6, 3]);

    assert_eq!(execute(&mut stack, &Instruction::Push(1)), Exception::Ok);
    assert_eq!(stack.len(), 3);

    for op in [Instruction::Add, Instruction::Multiply] {
        let before = stack.len();
        assert_eq!(execute(&mut stack, &op), Exception::Ok);
        assert_eq!(stack.len(), before - 1);
    }
}

/// The literal binary-op scenario
#[test]
fn test_binary_op_arithmetic_contract() {
    let mut vm = VM::new();

    vm.step(&Instruction::Push(69));
    vm.step(&Instruction::Push(420));
    assert_eq!(vm.step(&Instruction::Add), Exception::Ok);
    assert_eq!(vm.snapshot(), vec![489]);

    vm.step(&Instruction::Push(42));
    assert_eq!(vm.step(&Instruction::Subtract), Exception::Ok);
    assert_eq!(vm.snapshot(), vec![447]);

    vm.step(&Instruction::Push(2));
    assert_eq!(vm.step(&Instruction::Multiply), Exception::Ok);
    assert_eq!(vm.snapshot(), vec![894]);

    vm.step(&Instruction::Push(0));
    assert_eq!(vm.step(&Instruction::Divide), Exception::DivisionByZero);
    assert_eq!(vm.snapshot(), vec![894, 0]);
}

/// Snapshot is bottom to top
#[test]
fn test_snapshot_order_contract() {
    let mut vm = VM::new();
    for value in [1, 2, 3] {
        vm.step(&Instruction::Push(value));
    }
    assert_eq!(vm.snapshot(), vec![1, 2, 3]);
    assert_eq!(vm.stack().peek(), Some(3));
}

/// Stack and VM can move between threads
#[test]
fn test_send_contract() {
    fn assert_send<T: Send>() {}
    assert_send::<Stack>();
    assert_send::<VM>();
}
