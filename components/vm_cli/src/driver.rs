//! Program driver
//!
//! The Driver owns a VM, feeds it a program and renders what happens:
//! - the stack before the first instruction
//! - a `(<MNEMONIC>) ` prefixed dump after each executed instruction
//! - an `Exception activated` report for each rejected instruction
//! - the stack after the last instruction

use std::io::{self, Write};

use bytecode_system::Program;
use interpreter::{dump, ExecutionFault, Stack, StepReport, VM};
use tracing::{info, instrument};

use crate::error::CliResult;

/// What to do when an instruction is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HaltPolicy {
    /// Stop the program at the first rejected instruction
    #[default]
    Abort,
    /// Report the rejection and carry on with the next instruction
    Continue,
}

/// Runs programs on an owned VM and writes traces
#[derive(Debug)]
pub struct Driver {
    /// Dump the stack after every executed instruction
    trace: bool,
    /// Suppress all stdout dumps
    quiet: bool,
    /// Reaction to rejected instructions
    policy: HaltPolicy,
    /// VM instance that keeps its stack across runs
    vm: VM,
}

impl Driver {
    /// Create a driver with tracing enabled and the abort policy
    ///
    /// # Example
    /// ```
    /// use vm_cli::{Driver, HaltPolicy};
    ///
    /// let driver = Driver::new().with_policy(HaltPolicy::Continue);
    /// assert_eq!(driver.policy(), HaltPolicy::Continue);
    /// ```
    pub fn new() -> Self {
        Self {
            trace: true,
            quiet: false,
            policy: HaltPolicy::Abort,
            vm: VM::new(),
        }
    }

    /// Enable per-instruction stack dumps
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Suppress every stdout dump
    pub fn with_quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Select the halt policy
    pub fn with_policy(mut self, policy: HaltPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current halt policy
    pub fn policy(&self) -> HaltPolicy {
        self.policy
    }

    /// Borrow the VM's stack
    pub fn stack(&self) -> &Stack {
        self.vm.stack()
    }

    /// Run a program, writing dumps to `out` and fault reports to `err`
    ///
    /// Under [`HaltPolicy::Abort`] the first fault is reported and returned
    /// as [`CliError::Fault`](crate::CliError::Fault). Under [`HaltPolicy::Continue`] every fault is
    /// reported and the collected faults are returned.
    ///
    /// # Example
    /// ```
    /// use bytecode_system::{Instruction, Program};
    /// use vm_cli::Driver;
    ///
    /// let program = Program::from(vec![Instruction::Push(1)]);
    /// let mut out = Vec::new();
    /// let mut err = Vec::new();
    ///
    /// let faults = Driver::new().run(&program, &mut out, &mut err).unwrap();
    /// assert!(faults.is_empty());
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "Stack: \n  [empty]\n(PUSH) Stack: \n  1\nStack: \n  1\n"
    /// );
    /// ```
    #[instrument(level = "debug", skip_all, fields(policy = ?self.policy))]
    pub fn run<O, E>(
        &mut self,
        program: &Program,
        out: &mut O,
        err: &mut E,
    ) -> CliResult<Vec<ExecutionFault>>
    where
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        let show = !self.quiet;
        let trace = self.trace && show;

        if show {
            dump::write_stack(out, self.vm.stack())?;
        }

        let mut written: io::Result<()> = Ok(());
        let mut observer = |report: &StepReport<'_>| {
            if written.is_ok() {
                written = render_step(&mut *out, &mut *err, report, trace);
            }
        };

        let faults = match self.policy {
            HaltPolicy::Abort => {
                let outcome = self.vm.run_with(program, &mut observer);
                written?;
                outcome?;
                Vec::new()
            }
            HaltPolicy::Continue => {
                let faults = self.vm.run_continue_with(program, &mut observer);
                written?;
                faults
            }
        };

        if show {
            dump::write_stack(out, self.vm.stack())?;
        }
        info!(
            instructions = program.len(),
            faults = faults.len(),
            "program finished"
        );
        Ok(faults)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the trace line or fault report for one step
fn render_step<O, E>(out: &mut O, err: &mut E, report: &StepReport<'_>, trace: bool) -> io::Result<()>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    if report.exception.is_err() {
        writeln!(err, "Exception activated: {}", report.exception)?;
        return dump::write_stack(err, report.stack);
    }
    if trace {
        write!(out, "({}) ", report.instruction.mnemonic())?;
        dump::write_stack(out, report.stack)?;
    }
    Ok(())
}
