//! Command-line arguments

use clap::Parser;

use crate::driver::HaltPolicy;

/// Run the built-in sample program on the stack VM
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "stack-vm", version, about)]
pub struct Cli {
    /// Do not dump the stack after every instruction
    #[arg(long)]
    pub no_trace: bool,

    /// Keep executing after a rejected instruction instead of aborting
    #[arg(long = "continue")]
    pub continue_on_fault: bool,

    /// Suppress all stack dumps on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the program listing before running it
    #[arg(short, long)]
    pub print_program: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Whether per-instruction dumps are enabled
    pub fn trace(&self) -> bool {
        !self.no_trace && !self.quiet
    }

    /// Halt policy selected by the flags
    pub fn policy(&self) -> HaltPolicy {
        if self.continue_on_fault {
            HaltPolicy::Continue
        } else {
            HaltPolicy::Abort
        }
    }
}
