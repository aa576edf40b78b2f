//! Virtual Machine for program execution
//!
//! Main entry point for running instruction sequences. The VM owns one
//! [`Stack`]; separate VMs share nothing.

use bytecode_system::{Instruction, Program, RawInstruction};
use core_types::{Exception, Word};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::context::ExecutionContext;
use crate::dispatch;
use crate::stack::Stack;

/// A rejected instruction inside a program run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{exception} at instruction {index} ({instruction})")]
pub struct ExecutionFault {
    /// Position of the instruction in the program
    pub index: usize,
    /// The instruction that was rejected
    pub instruction: Instruction,
    /// Why it was rejected
    pub exception: Exception,
}

/// Outcome of one instruction, handed to run observers
#[derive(Debug, Clone, Copy)]
pub struct StepReport<'a> {
    /// Position of the instruction in the program
    pub index: usize,
    /// The instruction that was executed
    pub instruction: &'a Instruction,
    /// Result of executing it
    pub exception: Exception,
    /// Stack state after execution
    pub stack: &'a Stack,
}

impl StepReport<'_> {
    /// Convert a failed step into a fault
    pub fn fault(&self) -> Option<ExecutionFault> {
        if self.exception.is_ok() {
            return None;
        }
        Some(ExecutionFault {
            index: self.index,
            instruction: *self.instruction,
            exception: self.exception,
        })
    }
}

/// Virtual Machine for executing programs
#[derive(Debug, Clone, Default)]
pub struct VM {
    /// Operand stack
    stack: Stack,
}

impl VM {
    /// Create a new VM instance with an empty stack
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
        }
    }

    /// Borrow the VM's stack
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Copy of the stack contents, bottom to top
    pub fn snapshot(&self) -> Vec<Word> {
        self.stack.snapshot()
    }

    /// Empty the stack
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Execute a single instruction
    pub fn step(&mut self, instruction: &Instruction) -> Exception {
        dispatch::execute(&mut self.stack, instruction)
    }

    /// Decode and execute a single raw instruction
    pub fn step_raw(&mut self, raw: RawInstruction) -> Exception {
        dispatch::execute_raw(&mut self.stack, raw)
    }

    /// Execute a program, stopping at the first rejected instruction
    ///
    /// # Example
    ///
    /// ```
    /// use bytecode_system::{Instruction, Program};
    /// use core_types::Exception;
    /// use interpreter::VM;
    ///
    /// let program = Program::from(vec![
    ///     Instruction::Push(1),
    ///     Instruction::Push(0),
    ///     Instruction::Divide,
    ///     Instruction::Push(5),
    /// ]);
    ///
    /// let mut vm = VM::new();
    /// let fault = vm.run(&program).unwrap_err();
    /// assert_eq!(fault.index, 2);
    /// assert_eq!(fault.exception, Exception::DivisionByZero);
    /// assert_eq!(vm.snapshot(), vec![1, 0]);
    /// ```
    pub fn run(&mut self, program: &Program) -> Result<(), ExecutionFault> {
        self.run_with(program, |_| {})
    }

    /// Execute a program, stopping at the first rejected instruction
    ///
    /// `observer` sees every executed instruction, including the one that
    /// faulted.
    #[instrument(level = "debug", skip_all, fields(len = program.len()))]
    pub fn run_with<F>(&mut self, program: &Program, mut observer: F) -> Result<(), ExecutionFault>
    where
        F: FnMut(&StepReport<'_>),
    {
        for (index, instruction) in ExecutionContext::new(program) {
            let exception = dispatch::execute(&mut self.stack, instruction);
            let report = StepReport {
                index,
                instruction,
                exception,
                stack: &self.stack,
            };
            observer(&report);
            if let Some(fault) = report.fault() {
                debug!(%fault, "run halted");
                return Err(fault);
            }
        }
        Ok(())
    }

    /// Execute every instruction of a program, skipping rejected ones
    pub fn run_continue(&mut self, program: &Program) -> Vec<ExecutionFault> {
        self.run_continue_with(program, |_| {})
    }

    /// Execute every instruction of a program, skipping rejected ones
    ///
    /// Returns the faults in program order.
    #[instrument(level = "debug", skip_all, fields(len = program.len()))]
    pub fn run_continue_with<F>(&mut self, program: &Program, mut observer: F) -> Vec<ExecutionFault>
    where
        F: FnMut(&StepReport<'_>),
    {
        let mut faults = Vec::new();
        for (index, instruction) in ExecutionContext::new(program) {
            let exception = dispatch::execute(&mut self.stack, instruction);
            let report = StepReport {
                index,
                instruction,
                exception,
                stack: &self.stack,
            };
            observer(&report);
            faults.extend(report.fault());
        }
        if !faults.is_empty() {
            debug!(count = faults.len(), "run finished with faults");
        }
        faults
    }
}
