//! Instruction representation
//!
//! [`Instruction`] is the closed set of operations the engine understands.
//! [`RawInstruction`] is the open tag-plus-operand encoding; decoding it is
//! the only place an unknown instruction kind can appear.

use core_types::{Exception, Word};

use crate::opcode::Opcode;

/// A single VM instruction
///
/// Only `Push` carries an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Push a word onto the stack
    Push(Word),
    /// Replace the top two values with their sum
    Add,
    /// Replace the top two values with second-top minus top
    Subtract,
    /// Replace the top two values with their product
    Multiply,
    /// Replace the top two values with second-top divided by top
    Divide,
}

impl Instruction {
    /// Get the opcode of this instruction
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Push(_) => Opcode::Push,
            Instruction::Add => Opcode::Add,
            Instruction::Subtract => Opcode::Subtract,
            Instruction::Multiply => Opcode::Multiply,
            Instruction::Divide => Opcode::Divide,
        }
    }

    /// Get the operand, if this instruction has one
    pub fn operand(&self) -> Option<Word> {
        match self {
            Instruction::Push(value) => Some(*value),
            _ => None,
        }
    }

    /// Printable mnemonic used in traces
    pub fn mnemonic(&self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// Encode into the open tag-plus-operand form
    pub fn to_raw(&self) -> RawInstruction {
        RawInstruction {
            tag: self.opcode().tag(),
            operand: self.operand().unwrap_or(0),
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Push(value) => write!(f, "{} {}", self.mnemonic(), value),
            _ => f.write_str(self.mnemonic()),
        }
    }
}

/// Undecoded instruction as it appears in an instruction stream
///
/// The tag may name an opcode this VM does not know.
///
/// # Examples
///
/// ```
/// use bytecode_system::{Instruction, RawInstruction};
/// use core_types::Exception;
///
/// let push = RawInstruction::new(0, 69);
/// assert_eq!(Instruction::try_from(push), Ok(Instruction::Push(69)));
///
/// let bogus = RawInstruction::new(42, 0);
/// assert_eq!(Instruction::try_from(bogus), Err(Exception::IllegalInstruction));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawInstruction {
    /// Numeric opcode tag
    pub tag: u8,
    /// Operand (ignored by every opcode except `Push`)
    pub operand: Word,
}

impl RawInstruction {
    /// Create a raw instruction
    pub fn new(tag: u8, operand: Word) -> Self {
        Self { tag, operand }
    }

    /// Decode into a known instruction
    pub fn decode(self) -> Result<Instruction, Exception> {
        Instruction::try_from(self)
    }
}

impl TryFrom<RawInstruction> for Instruction {
    type Error = Exception;

    fn try_from(raw: RawInstruction) -> Result<Self, Self::Error> {
        let instruction = match Opcode::try_from(raw.tag)? {
            Opcode::Push => Instruction::Push(raw.operand),
            Opcode::Add => Instruction::Add,
            Opcode::Subtract => Instruction::Subtract,
            Opcode::Multiply => Instruction::Multiply,
            Opcode::Divide => Instruction::Divide,
        };
        Ok(instruction)
    }
}

impl From<Instruction> for RawInstruction {
    fn from(instruction: Instruction) -> Self {
        instruction.to_raw()
    }
}
