//! A LIFO stack backed by a growable array.
//!
//! # Examples
//!
//! ```
//! use containers::stack::Stack;
//! use containers::Error;
//!
//! let mut stack = Stack::new();
//!
//! // Nothing in here yet.
//! assert_eq!(stack.top(), Err(Error::EmptyContainer { container: "stack" }));
//!
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.top(), Ok(&2));
//!
//! // Popping hands back the most recently pushed value.
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.size(), 0);
//! ```

use tracing::debug;

use crate::error::{Error, Result};

const EMPTY: Error = Error::EmptyContainer { container: "stack" };

/// A last-in, first-out collection of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    // The top of the stack is the end of the buffer.
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`. This does not allocate until the first `push`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Generates a new, empty `Stack` able to hold `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Puts `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Returns the value on top of the stack without removing it.
    pub fn top(&self) -> Result<&T> {
        self.items.last().ok_or(EMPTY)
    }

    /// Removes the value on top of the stack and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::stack::Stack;
    ///
    /// let mut stack: Stack<_> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(stack.pop(), Ok(3));
    /// assert_eq!(stack.size(), 2);
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(EMPTY)
    }

    /// The number of values currently on the stack.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the stack. The backing buffer keeps its allocation for reuse.
    pub fn clear(&mut self) {
        debug!(dropped = self.items.len(), "clearing stack");
        self.items.clear();
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every value in order, so the last one yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
