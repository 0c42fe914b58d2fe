//! Strata Keyspace - order-preserving keys and subspaces
//!
//! Strata Keyspace lets independent components share one ordered key-value
//! store by carving its flat key space into disjoint, prefix-delimited
//! subspaces, and by packing structured identifiers (tuples) into byte
//! strings whose byte order matches the order of the values.
//!
//! # Quick Start
//!
//! ```
//! use strata_keyspace::{tuple, KeySpace, Subspace};
//!
//! let users = Subspace::root().sub("users")?;
//! let key = users.pack(&tuple![42, "email"])?;
//!
//! assert!(users.contains(&key));
//! assert_eq!(users.unpack(&key)?, tuple![42, "email"]);
//!
//! // Scan everything under "users"
//! let (begin, end) = (users.begin_key(), users.end_key());
//! assert!(begin <= key && key < end);
//! # Ok::<(), strata_keyspace::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `strata-core`: `Key`, `KeySelector`, range contracts and `Limits`
//! - `strata-tuple`: the tuple codec
//! - `strata-subspace`: the `KeySpace` trait and the `Subspace` value type
//!
//! Resolving selectors and ranges against a live store is the storage
//! layer's job; nothing here performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Error, Result};
pub use strata_core::{
    ExactRange, Key, KeyError, KeyRange, KeySelector, LimitError, Limits, Range, SelectorRange,
};
pub use strata_subspace::{KeySpace, Subspace, SubspaceError};
pub use strata_tuple::{
    decode, encode, pack, tuple, typecode, unpack, DecodeError, Element, EncodeError, Tuple,
};
pub use uuid::Uuid;
