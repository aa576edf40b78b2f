//! Machine word representation.

/// A single VM value: a fixed-width signed 64-bit integer.
///
/// The VM has no other value types, so the word is a plain alias rather
/// than a tagged enum.
///
/// # Examples
///
/// ```
/// use core_types::Word;
///
/// let w: Word = -7;
/// assert_eq!(w / 2, -3);
/// ```
pub type Word = i64;

/// Maximum number of words a VM stack can hold.
pub const STACK_CAPACITY: usize = 1024;
