//! Instruction set for the stack virtual machine
//!
//! This crate defines what the VM can be asked to do: opcodes, decoded
//! instructions, the raw encoding that may carry unknown opcodes, and the
//! program container the driver builds.
//!
//! # Example
//!
//! ```
//! use bytecode_system::{Instruction, Opcode, Program};
//!
//! let mut program = Program::new();
//! program.emit(Instruction::Push(10));
//! program.emit(Instruction::Push(3));
//! program.emit(Instruction::Subtract);
//!
//! assert_eq!(program.len(), 3);
//! assert_eq!(program.get(2).map(|i| i.opcode()), Some(Opcode::Subtract));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export main types at crate root
pub use instruction::{Instruction, RawInstruction};
pub use opcode::Opcode;
pub use program::Program;
