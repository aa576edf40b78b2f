//! Instruction engine for the stack virtual machine
//!
//! This crate provides:
//! - A bounded operand stack ([`Stack`])
//! - Single-instruction execution with precondition checks ([`execute`])
//! - A VM that owns a stack and runs whole programs ([`VM`])
//! - Stack dump rendering for traces ([`dump`])
//!
//! # Example
//!
//! ```
//! use bytecode_system::{Instruction, Program};
//! use interpreter::VM;
//!
//! let program = Program::from(vec![
//!     Instruction::Push(69),
//!     Instruction::Push(420),
//!     Instruction::Add,
//! ]);
//!
//! let mut vm = VM::new();
//! vm.run(&program).unwrap();
//! assert_eq!(vm.snapshot(), vec![489]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod dispatch;
pub mod dump;
pub mod stack;
pub mod vm;

// Re-export main types at crate root
pub use context::ExecutionContext;
pub use dispatch::{execute, execute_raw};
pub use stack::{Overflow, Stack};
pub use vm::{ExecutionFault, StepReport, VM};
