//! Core types for the Strata keyspace layer
//!
//! This crate defines the contracts shared by the tuple codec and the
//! subspace layer:
//! - Key: Opaque byte-string key with byte-wise ordering
//! - KeySelector: Store-resolved reference to a key
//! - Range / ExactRange: Half-open scan interval contracts
//! - KeyRange / SelectorRange: Concrete scan intervals
//! - Limits: Configurable key size and nesting limits

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod key;
pub mod limits;
pub mod range;
pub mod selector;

pub use key::{Key, KeyError};
pub use limits::{LimitError, Limits, DEFAULT_MAX_KEY_BYTES, DEFAULT_MAX_NESTING_DEPTH};
pub use range::{ExactRange, KeyRange, Range, SelectorRange};
pub use selector::KeySelector;
