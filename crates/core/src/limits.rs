//! Size limits for keys and tuples
//!
//! This module defines configurable limits enforced by the `*_with_limits`
//! variants of the tuple codec and the subspace layer. Violations surface as
//! `LimitError` (or are wrapped by the codec's own error types).
//!
//! ## Contract
//!
//! The plain `pack`/`unpack` paths run under [`Limits::unbounded`] and never
//! fail on size or depth. The defaults are what a store applies to untrusted
//! keys: keys written under the defaults must stay readable under the
//! defaults.
//! Custom limits can be loaded from configuration (`Limits` is serde
//! (de)serializable, and missing fields fall back to the defaults).

use crate::key::Key;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum key size in bytes
pub const DEFAULT_MAX_KEY_BYTES: usize = 10_000;

/// Default maximum tuple nesting depth
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Size limits for keys and tuples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum key length in bytes (default: 10,000)
    pub max_key_bytes: usize,

    /// Maximum nesting depth of tuples within tuples (default: 128)
    ///
    /// The outermost tuple is depth 0 and each nested tuple adds one.
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_key_bytes: DEFAULT_MAX_KEY_BYTES,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl Limits {
    /// Limits that accept any key length and any nesting depth
    pub fn unbounded() -> Self {
        Limits {
            max_key_bytes: usize::MAX,
            max_nesting_depth: usize::MAX,
        }
    }

    /// Create limits with small values for testing
    ///
    /// This is useful for unit tests that need to test limit enforcement
    /// without creating extremely large values.
    pub fn with_small_limits() -> Self {
        Limits {
            max_key_bytes: 100,
            max_nesting_depth: 4,
        }
    }

    /// Validate a key length
    ///
    /// Returns `Ok(())` if the key fits, or `Err(LimitError::KeyTooLong)`.
    pub fn validate_key(&self, key: &Key) -> Result<(), LimitError> {
        let len = key.len();
        if len > self.max_key_bytes {
            return Err(LimitError::KeyTooLong {
                actual: len,
                max: self.max_key_bytes,
            });
        }
        Ok(())
    }

    /// Validate a nesting depth
    pub fn validate_depth(&self, depth: usize) -> Result<(), LimitError> {
        if depth > self.max_nesting_depth {
            return Err(LimitError::NestingTooDeep {
                actual: depth,
                max: self.max_nesting_depth,
            });
        }
        Ok(())
    }
}

/// Limit validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// Key exceeds maximum length
    #[error("Key too long: {actual} bytes exceeds maximum {max}")]
    KeyTooLong {
        /// Actual key length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Tuple nesting exceeds maximum depth
    #[error("Nesting too deep: {actual} levels exceeds maximum {max}")]
    NestingTooDeep {
        /// Actual nesting depth
        actual: usize,
        /// Maximum allowed depth
        max: usize,
    },
}

impl LimitError {
    /// Get the reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::KeyTooLong { .. } => "key_too_long",
            LimitError::NestingTooDeep { .. } => "nesting_too_deep",
        }
    }
}
