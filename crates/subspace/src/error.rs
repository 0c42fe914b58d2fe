//! Subspace errors

use strata_core::{Key, LimitError};
use strata_tuple::{DecodeError, EncodeError};
use thiserror::Error;

/// Result type alias for subspace operations
pub type Result<T> = std::result::Result<T, SubspaceError>;

/// Errors produced by subspace operations
///
/// `NotInSubspace` is deliberately separate from `Decode`: the first means
/// the key belongs to another namespace, the second means the key is in
/// this namespace but its suffix is malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubspaceError {
    /// Key does not start with the subspace prefix
    #[error("Key {key} is not in subspace {prefix}")]
    NotInSubspace {
        /// The rejected key
        key: Key,
        /// Prefix of the subspace that rejected it
        prefix: Key,
    },

    /// Tuple could not be packed
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Key suffix could not be unpacked
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Packed key exceeds a configured limit
    #[error(transparent)]
    Limit(#[from] LimitError),
}

impl SubspaceError {
    /// Get the reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            SubspaceError::NotInSubspace { .. } => "not_in_subspace",
            SubspaceError::Encode(e) => e.reason_code(),
            SubspaceError::Decode(e) => e.reason_code(),
            SubspaceError::Limit(e) => e.reason_code(),
        }
    }

    /// True when the key belongs to a different namespace
    pub fn is_not_in_subspace(&self) -> bool {
        matches!(self, SubspaceError::NotInSubspace { .. })
    }
}
