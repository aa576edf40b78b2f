//! Core value and outcome types for the stack virtual machine.
//!
//! This crate provides the foundational types shared by every other
//! component: the machine word stored on the stack and the closed set of
//! exceptions an instruction can report.
//!
//! # Overview
//!
//! - [`Word`] - The only value type the VM knows about
//! - [`Exception`] - Outcome code of executing one instruction
//!
//! # Examples
//!
//! ```
//! use core_types::{Exception, Word};
//!
//! let value: Word = 42;
//! assert_eq!(value, 42);
//!
//! let outcome = Exception::DivisionByZero;
//! assert!(!outcome.is_ok());
//! assert_eq!(outcome.to_string(), "EXCEPTION_DIVISION_BY_ZERO");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod value;

pub use error::Exception;
pub use value::{Word, STACK_CAPACITY};
