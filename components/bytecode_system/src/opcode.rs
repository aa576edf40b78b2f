//! Instruction opcodes
//!
//! Defines the operand-free kinds of VM instructions and their stable
//! numeric tags.

use core_types::Exception;

/// The kind of a VM instruction
///
/// The discriminants are the numeric tags used by [`crate::RawInstruction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Push the operand onto the stack
    Push = 0,
    /// Add top two stack values
    Add = 1,
    /// Multiply top two stack values
    Multiply = 2,
    /// Divide second-top by top
    Divide = 3,
    /// Subtract top from second-top
    Subtract = 4,
}

impl Opcode {
    /// Every opcode in tag order
    pub const ALL: [Opcode; 5] = [
        Opcode::Push,
        Opcode::Add,
        Opcode::Multiply,
        Opcode::Divide,
        Opcode::Subtract,
    ];

    /// Numeric tag for this opcode
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Look up an opcode by numeric tag
    pub fn from_tag(tag: u8) -> Option<Opcode> {
        Opcode::ALL.get(tag as usize).copied()
    }

    /// Printable mnemonic used in traces
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Push => "PUSH",
            Opcode::Add => "PLUS",
            Opcode::Subtract => "MINUS",
            Opcode::Multiply => "MULTIPLICATION",
            Opcode::Divide => "DIVISION",
        }
    }

    /// Check if this opcode carries an operand
    pub fn has_operand(self) -> bool {
        matches!(self, Opcode::Push)
    }

    /// Check if this opcode is a binary arithmetic operation
    pub fn is_binary_arithmetic(self) -> bool {
        matches!(
            self,
            Opcode::Add | Opcode::Subtract | Opcode::Multiply | Opcode::Divide
        )
    }

    /// Number of stack values consumed
    pub fn arity(self) -> usize {
        if self.is_binary_arithmetic() {
            2
        } else {
            0
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = Exception;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Opcode::from_tag(tag).ok_or(Exception::IllegalInstruction)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
