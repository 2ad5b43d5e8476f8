//! Error types for the selection operations.

use std::fmt;
use thiserror::Error;

/// The argument that was absent when an operation was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Collection,
    Comparator,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Collection => f.write_str("collection"),
            Argument::Comparator => f.write_str("comparator"),
        }
    }
}

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call itself was malformed; a bug at the call site.
    InvalidArgument,
    /// The query was well formed but the data holds no answer.
    NotFound,
}

/// Errors returned by the selection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was absent.
    #[error("invalid argument: {0} is absent")]
    InvalidArgument(Argument),

    /// The collection has no elements.
    #[error("collection is empty")]
    EmptyCollection,

    /// No distinct value holds the requested rank.
    #[error("no distinct value has rank {0}")]
    NoSuchRank(usize),

    /// No element lies inside the requested range.
    #[error("no element lies within the requested range")]
    EmptyRange,

    /// Every element is less than the key.
    #[error("no element is greater than or equal to the key")]
    NoCeiling,

    /// Every element is greater than the key.
    #[error("no element is less than or equal to the key")]
    NoFloor,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::EmptyCollection
            | Error::NoSuchRank(_)
            | Error::EmptyRange
            | Error::NoCeiling
            | Error::NoFloor => ErrorKind::NotFound,
        }
    }

    /// Returns `true` when the query was valid but had no answer.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type for selection operations.
pub type Result<T> = std::result::Result<T, Error>;
