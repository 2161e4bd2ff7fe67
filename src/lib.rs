//! This crate exposes a few elementary generic containers, mostly for
//! educational purposes.
//!
//! ## Stack and queue
//!
//! [`Stack`] and [`Queue`] are thin wrappers over growable contiguous storage.
//! Pushing, popping, enqueueing and dequeueing are all amortized `O(1)`.
//! Peeking at or removing from an empty container is not a panic: it returns
//! [`Error::EmptyContainer`] and leaves the container untouched.
//!
//! ## Binary tree
//!
//! A [`Tree`] is built from a level-order list of slots where the children of
//! slot `i` are slots `2i + 1` and `2i + 2` and a slot may be absent. Once
//! built it can be walked in pre-order, in-order or post-order, and checked
//! for the binary search tree invariants:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less
//!    than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! > Checking only a node against its direct children is not enough to
//! > establish these; see [`btree::bst`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[cfg(test)]
#[macro_use]
mod test;

pub mod btree;
pub mod error;
pub mod queue;
pub mod stack;

pub use btree::{Node, Tree};
pub use error::{Error, Result};
pub use queue::Queue;
pub use stack::Stack;
