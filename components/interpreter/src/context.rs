//! Execution context for VM

use bytecode_system::{Instruction, Program};

/// Execution context for a program
///
/// Tracks the instruction pointer while the VM walks a program in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionContext<'a> {
    /// The program being executed
    pub program: &'a Program,
    /// Index of the next instruction to fetch
    pub instruction_pointer: usize,
}

impl<'a> ExecutionContext<'a> {
    /// Create a new execution context positioned at the first instruction
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            instruction_pointer: 0,
        }
    }

    /// Advance instruction pointer and return the current instruction with its index
    pub fn fetch(&mut self) -> Option<(usize, &'a Instruction)> {
        let index = self.instruction_pointer;
        let instruction = self.program.get(index)?;
        self.instruction_pointer += 1;
        Some((index, instruction))
    }

    /// Check if every instruction has been fetched
    pub fn is_finished(&self) -> bool {
        self.instruction_pointer >= self.program.len()
    }
}

impl<'a> Iterator for ExecutionContext<'a> {
    type Item = (usize, &'a Instruction);

    fn next(&mut self) -> Option<Self::Item> {
        self.fetch()
    }
}
