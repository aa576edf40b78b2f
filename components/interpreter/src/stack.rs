//! Bounded value stack
//!
//! The stack is the VM's only data store. Storage is inline and fixed at
//! [`STACK_CAPACITY`] words; only the first `len()` slots are live.

use arrayvec::ArrayVec;
use core_types::{Exception, Word, STACK_CAPACITY};
use thiserror::Error;

/// Returned by [`Stack::push`] when the stack is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stack overflow: cannot push {value}, capacity of {STACK_CAPACITY} reached")]
pub struct Overflow {
    /// The value that was rejected
    pub value: Word,
}

impl From<Overflow> for Exception {
    fn from(_: Overflow) -> Self {
        Exception::StackOverflow
    }
}

/// Operand stack for one VM execution context
///
/// # Examples
///
/// ```
/// use interpreter::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(69).unwrap();
/// stack.push(420).unwrap();
/// assert_eq!(stack.top_n(2), Some(&[69, 420][..]));
///
/// stack.replace_top_binary(489).unwrap();
/// assert_eq!(stack.snapshot(), vec![489]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    values: ArrayVec<Word, STACK_CAPACITY>,
}

impl Stack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            values: ArrayVec::new(),
        }
    }

    /// Push a value onto the top of the stack
    ///
    /// Fails if the stack is full, in which case the stack is unchanged.
    pub fn push(&mut self, value: Word) -> Result<(), Overflow> {
        self.values
            .try_push(value)
            .map_err(|err| Overflow {
                value: err.element(),
            })
    }

    /// Check whether at least `n` values are present
    pub fn pop_count_check(&self, n: usize) -> bool {
        self.values.len() >= n
    }

    /// Read-only view of the top `n` values, bottom to top
    ///
    /// Returns `None` unless [`Stack::pop_count_check`] holds for `n`.
    pub fn top_n(&self, n: usize) -> Option<&[Word]> {
        if !self.pop_count_check(n) {
            return None;
        }
        let len = self.values.len();
        Some(&self.values[len - n..])
    }

    /// Replace the top two values with `result`
    ///
    /// Net effect is one pop. Fails without mutation when fewer than two
    /// values are present.
    pub fn replace_top_binary(&mut self, result: Word) -> Result<(), Exception> {
        if !self.pop_count_check(2) {
            return Err(Exception::StackUnderflow);
        }
        let new_len = self.values.len() - 1;
        self.values.truncate(new_len);
        self.values[new_len - 1] = result;
        Ok(())
    }

    /// Copy of all live values, bottom to top
    pub fn snapshot(&self) -> Vec<Word> {
        self.values.to_vec()
    }

    /// Borrow all live values, bottom to top
    pub fn as_slice(&self) -> &[Word] {
        &self.values
    }

    /// Top value, if any
    pub fn peek(&self) -> Option<Word> {
        self.values.last().copied()
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the stack holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if another push would overflow
    pub fn is_full(&self) -> bool {
        self.values.is_full()
    }

    /// Maximum number of values
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Drop every value
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl std::fmt::Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Stack: ")?;
        if self.values.is_empty() {
            return writeln!(f, "  [empty]");
        }
        for value in &self.values {
            writeln!(f, "  {}", value)?;
        }
        Ok(())
    }
}
