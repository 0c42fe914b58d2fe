//! Unified error type for the keyspace layer
//!
//! Each crate reports its own error type. This module folds them into one
//! `Error` so callers mixing raw keys, tuples and subspaces can use `?`
//! throughout.

use strata_core::{KeyError, LimitError};
use strata_subspace::SubspaceError;
use strata_tuple::{DecodeError, EncodeError};
use thiserror::Error;

/// Result type alias for keyspace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the keyspace layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tuple could not be packed
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodeError),

    /// Bytes could not be unpacked into a tuple
    #[error("Decoding error: {0}")]
    Decoding(#[from] DecodeError),

    /// Key lies outside the subspace it was unpacked against
    #[error("{0}")]
    NotInSubspace(SubspaceError),

    /// Key manipulation failed
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    /// A configured limit was exceeded
    #[error("Limit exceeded: {0}")]
    Limit(#[from] LimitError),
}

impl From<SubspaceError> for Error {
    fn from(e: SubspaceError) -> Self {
        match e {
            SubspaceError::Encode(e) => Error::Encoding(e),
            SubspaceError::Decode(e) => Error::Decoding(e),
            SubspaceError::Limit(e) => Error::Limit(e),
            e @ SubspaceError::NotInSubspace { .. } => Error::NotInSubspace(e),
        }
    }
}

impl Error {
    /// Get the reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            Error::Encoding(e) => e.reason_code(),
            Error::Decoding(e) => e.reason_code(),
            Error::NotInSubspace(e) => e.reason_code(),
            Error::Key(e) => e.reason_code(),
            Error::Limit(e) => e.reason_code(),
        }
    }
}
