//! A FIFO queue backed by a growable ring buffer.
//!
//! # Examples
//!
//! ```
//! use containers::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//!
//! assert_eq!(queue.front(), Ok(&"a"));
//! assert_eq!(queue.back(), Ok(&"b"));
//!
//! // Values come out in the order they went in.
//! assert_eq!(queue.dequeue(), Ok("a"));
//! assert_eq!(queue.dequeue(), Ok("b"));
//! assert!(queue.dequeue().is_err());
//! ```

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{Error, Result};

const EMPTY: Error = Error::EmptyContainer { container: "queue" };

/// A first-in, first-out collection of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    // Oldest value at the front. A ring buffer lets `dequeue` avoid shifting the whole buffer.
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`. This does not allocate until the first `enqueue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Generates a new, empty `Queue` able to hold `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Adds `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Returns the oldest value in the queue without removing it.
    pub fn front(&self) -> Result<&T> {
        self.items.front().ok_or(EMPTY)
    }

    /// Returns the newest value in the queue without removing it.
    pub fn back(&self) -> Result<&T> {
        self.items.back().ok_or(EMPTY)
    }

    /// Removes the oldest value in the queue and returns it.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(EMPTY)
    }

    /// The number of values currently in the queue.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the queue. The backing buffer keeps its allocation for reuse.
    pub fn clear(&mut self) {
        debug!(dropped = self.items.len(), "clearing queue");
        self.items.clear();
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Enqueues every value in order, so the first one yielded is at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
