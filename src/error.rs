//! Errors returned by [`OrderedTree`][crate::OrderedTree] lookups and by parsing its
//! configuration from text.

use thiserror::Error;

/// Everything that can go wrong when querying a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tree has no entries so there is nothing to look at.
    #[error("tree is empty")]
    EmptyContainer,

    /// The descent fell off the bottom of the tree without meeting the value.
    #[error("element not found")]
    NotFound,

    /// A traversal order or insertion policy name wasn't recognised.
    #[error("invalid argument: {0:?}")]
    InvalidArgument(String),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
