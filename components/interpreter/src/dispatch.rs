//! Instruction dispatch
//!
//! Executes one instruction against a stack. The engine keeps no state of
//! its own; every precondition is checked before the stack is touched, so a
//! rejected instruction leaves the stack exactly as it was.

use bytecode_system::{Instruction, RawInstruction};
use core_types::{Exception, Word};
use tracing::{debug, trace};

use crate::stack::Stack;

/// Execute a single instruction
///
/// Binary operations compute `a OP b`, where `a` is the value below the top
/// and `b` is the top. Arithmetic wraps on overflow.
///
/// # Example
///
/// ```
/// use bytecode_system::Instruction;
/// use core_types::Exception;
/// use interpreter::{execute, Stack};
///
/// let mut stack = Stack::new();
/// assert_eq!(execute(&mut stack, &Instruction::Push(10)), Exception::Ok);
/// assert_eq!(execute(&mut stack, &Instruction::Push(3)), Exception::Ok);
/// assert_eq!(execute(&mut stack, &Instruction::Subtract), Exception::Ok);
/// assert_eq!(stack.snapshot(), vec![7]);
///
/// assert_eq!(execute(&mut stack, &Instruction::Add), Exception::StackUnderflow);
/// assert_eq!(stack.snapshot(), vec![7]);
/// ```
pub fn execute(stack: &mut Stack, instruction: &Instruction) -> Exception {
    let outcome = match *instruction {
        Instruction::Push(value) => stack.push(value).map_err(Exception::from),
        Instruction::Add => binary(stack, |a, b| Ok(a.wrapping_add(b))),
        Instruction::Subtract => binary(stack, |a, b| Ok(a.wrapping_sub(b))),
        Instruction::Multiply => binary(stack, |a, b| Ok(a.wrapping_mul(b))),
        Instruction::Divide => binary(stack, |a, b| {
            if b == 0 {
                return Err(Exception::DivisionByZero);
            }
            Ok(a.wrapping_div(b))
        }),
    };

    let exception = Exception::from_result(outcome);
    if exception.is_ok() {
        trace!(opcode = %instruction.opcode(), size = stack.len(), "instruction executed");
    } else {
        debug!(
            opcode = %instruction.opcode(),
            %exception,
            size = stack.len(),
            "instruction rejected"
        );
    }
    exception
}

/// Decode and execute a raw instruction
///
/// Unknown opcode tags are rejected with [`Exception::IllegalInstruction`]
/// before the stack is inspected.
pub fn execute_raw(stack: &mut Stack, raw: RawInstruction) -> Exception {
    match raw.decode() {
        Ok(instruction) => execute(stack, &instruction),
        Err(exception) => {
            debug!(tag = raw.tag, %exception, size = stack.len(), "illegal instruction");
            exception
        }
    }
}

/// Apply a binary operation to the top two values
fn binary<F>(stack: &mut Stack, op: F) -> Result<(), Exception>
where
    F: FnOnce(Word, Word) -> Result<Word, Exception>,
{
    let (a, b) = match stack.top_n(2) {
        Some(&[a, b]) => (a, b),
        _ => return Err(Exception::StackUnderflow),
    };
    let result = op(a, b)?;
    stack.replace_top_binary(result)
}
