//! Errors returned by the containers in this crate.

use thiserror::Error;

/// Everything that can go wrong when using a container. All of these are returned to the caller;
/// a failed operation leaves the container exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A peek or removal was attempted on a container holding no elements.
    #[error("{container} is empty")]
    EmptyContainer {
        /// Which kind of container was empty, e.g. `"stack"`.
        container: &'static str,
    },

    /// A tree was requested from a level-order sequence with no slots at all.
    #[error("no values")]
    EmptyInput,

    /// A tree was requested from a level-order sequence whose first slot is absent.
    #[error("level-order input has no root value")]
    AbsentRoot,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
