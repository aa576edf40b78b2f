//! Stack dump rendering
//!
//! Writes the human-readable stack listing used by traces and fault reports.

use std::io::{self, Write};

use crate::stack::Stack;

/// Write the stack listing to `out`
///
/// One value per line, bottom to top, or `[empty]` for an empty stack.
///
/// # Example
///
/// ```
/// use interpreter::{dump, Stack};
///
/// let mut stack = Stack::new();
/// stack.push(894).unwrap();
///
/// let mut out = Vec::new();
/// dump::write_stack(&mut out, &stack).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Stack: \n  894\n");
/// ```
pub fn write_stack<W: Write + ?Sized>(out: &mut W, stack: &Stack) -> io::Result<()> {
    write!(out, "{}", stack)
}
