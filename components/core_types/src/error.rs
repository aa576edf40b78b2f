//! Instruction outcome codes.
//!
//! Every instruction execution produces exactly one [`Exception`]. `Ok` is
//! the success value; every other variant names the precondition that
//! rejected the instruction.

use thiserror::Error;

/// The outcome of executing a single instruction.
///
/// These mirror the closed set of codes the VM can report. The `Display`
/// form is the stable diagnostic name printed by the driver.
///
/// # Examples
///
/// ```
/// use core_types::Exception;
///
/// assert!(Exception::Ok.is_ok());
/// assert_eq!(Exception::StackUnderflow.into_result(), Err(Exception::StackUnderflow));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
pub enum Exception {
    /// The instruction executed successfully
    #[default]
    #[error("EXCEPTION_OK")]
    Ok,
    /// A push was attempted on a full stack
    #[error("EXCEPTION_STACK_OVERFLOW")]
    StackOverflow,
    /// An operation needed more values than the stack holds
    #[error("EXCEPTION_STACK_UNDERFLOW")]
    StackUnderflow,
    /// The instruction kind is not part of the instruction set
    #[error("EXCEPTION_ILLEGAL_INSTRUCTION")]
    IllegalInstruction,
    /// A division had a zero divisor
    #[error("EXCEPTION_DIVISION_BY_ZERO")]
    DivisionByZero,
}

impl Exception {
    /// All outcome codes, in declaration order
    pub const ALL: [Exception; 5] = [
        Exception::Ok,
        Exception::StackOverflow,
        Exception::StackUnderflow,
        Exception::IllegalInstruction,
        Exception::DivisionByZero,
    ];

    /// Check if this is the success value
    pub fn is_ok(self) -> bool {
        matches!(self, Exception::Ok)
    }

    /// Check if this is a failure
    pub fn is_err(self) -> bool {
        !self.is_ok()
    }

    /// Convert to a `Result` so failures can be propagated with `?`
    pub fn into_result(self) -> Result<(), Exception> {
        match self {
            Exception::Ok => Ok(()),
            failure => Err(failure),
        }
    }

    /// Collapse a `Result` back into an outcome code
    pub fn from_result(result: Result<(), Exception>) -> Exception {
        match result {
            Ok(()) => Exception::Ok,
            Err(failure) => failure,
        }
    }
}
