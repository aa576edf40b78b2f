//! Program - ordered instruction container
//!
//! A program is built by the caller and handed to the VM one instruction at
//! a time. It is not validated as a whole.

use crate::instruction::{Instruction, RawInstruction};

/// An ordered, finite sequence of instructions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Sequence of instructions in execution order
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new empty program
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Append an instruction
    pub fn emit(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    /// Get the instruction at `index`
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Get the number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the program has no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over instructions in order
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Remove all instructions
    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    /// Encode every instruction into its raw form
    pub fn to_raw(&self) -> Vec<RawInstruction> {
        self.instructions.iter().map(Instruction::to_raw).collect()
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Instruction> for Program {
    fn extend<I: IntoIterator<Item = Instruction>>(&mut self, iter: I) {
        self.instructions.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "{:04} {}", index, instruction)?;
        }
        Ok(())
    }
}
