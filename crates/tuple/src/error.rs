//! Tuple codec errors
//!
//! Encoding and decoding fail independently and for different reasons, so
//! they get separate error types. Both are local and final: nothing is
//! partially written and nothing is worth retrying.

use strata_core::LimitError;
use thiserror::Error;

/// Errors produced while packing a tuple
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Integer magnitude does not fit the eight-byte integer encodings
    #[error("Integer {value} is outside the encodable range of +/-(2^64 - 1)")]
    IntegerOutOfRange {
        /// The offending value
        value: i128,
    },

    /// A configured limit was exceeded
    #[error(transparent)]
    Limit(#[from] LimitError),
}

impl EncodeError {
    /// Get the reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            EncodeError::IntegerOutOfRange { .. } => "integer_out_of_range",
            EncodeError::Limit(e) => e.reason_code(),
        }
    }
}

/// Errors produced while unpacking bytes into a tuple
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended in the middle of a fixed-width payload
    #[error("Truncated input at offset {offset}: needed {needed} more bytes, {available} available")]
    Truncated {
        /// Offset where the payload starts
        offset: usize,
        /// Bytes required by the payload
        needed: usize,
        /// Bytes remaining in the input
        available: usize,
    },

    /// Type code not recognised
    #[error("Unknown type code 0x{tag:02x} at offset {offset}")]
    UnknownTag {
        /// The type code byte
        tag: u8,
        /// Offset of the type code
        offset: usize,
    },

    /// A byte string, unicode string or nested tuple has no terminator
    #[error("Unterminated {kind} starting at offset {offset}")]
    Unterminated {
        /// What was being read ("byte string", "unicode string", "nested tuple")
        kind: &'static str,
        /// Offset of the element's type code
        offset: usize,
    },

    /// Unicode string payload is not valid UTF-8
    #[error("Invalid UTF-8 in unicode string starting at offset {offset}")]
    InvalidUtf8 {
        /// Offset of the element's type code
        offset: usize,
    },

    /// Integer written wider than its minimal encoding
    #[error("Non-canonical integer encoding at offset {offset}")]
    NonCanonicalInteger {
        /// Offset of the integer's type code
        offset: usize,
    },

    /// A configured limit was exceeded
    #[error(transparent)]
    Limit(#[from] LimitError),
}

impl DecodeError {
    /// Get the reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            DecodeError::Truncated { .. } => "truncated",
            DecodeError::UnknownTag { .. } => "unknown_type_code",
            DecodeError::Unterminated { .. } => "unterminated",
            DecodeError::InvalidUtf8 { .. } => "invalid_utf8",
            DecodeError::NonCanonicalInteger { .. } => "non_canonical_integer",
            DecodeError::Limit(e) => e.reason_code(),
        }
    }
}
