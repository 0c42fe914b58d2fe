//! Subspaces: prefix-delimited namespaces over a flat key space
//!
//! This crate lets independent components share one ordered key space:
//! - KeySpace: Capability trait (pack, unpack, contains, scan boundaries)
//! - Subspace: Immutable prefix implementing KeySpace
//! - SubspaceError: NotInSubspace, plus wrapped codec and limit errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod keyspace;
pub mod subspace;

pub use error::{Result, SubspaceError};
pub use keyspace::KeySpace;
pub use subspace::Subspace;
