//! Stack VM CLI
//!
//! Entry point for the stack VM. Parses CLI arguments and delegates to the
//! Driver for execution of the built-in sample program.

use std::io;

use clap::Parser as ClapParser;
use tracing::{error, warn};
use vm_cli::{logging, sample_program, Cli, CliError, Driver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let program = sample_program();
    if cli.print_program {
        print!("{}", program);
    }

    let mut driver = Driver::new()
        .with_trace(cli.trace())
        .with_quiet(cli.quiet)
        .with_policy(cli.policy());

    let stdout = io::stdout();
    let stderr = io::stderr();

    match driver.run(&program, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(faults) if faults.is_empty() => {}
        Ok(faults) => {
            warn!(count = faults.len(), "program finished with faults");
            std::process::exit(1);
        }
        Err(CliError::Fault(fault)) => {
            error!(%fault, "program aborted");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
