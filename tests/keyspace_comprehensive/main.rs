//! Keyspace Comprehensive Test Suite
//!
//! End-to-end coverage of the tuple codec and the subspace layer through
//! the public facade crate.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test keyspace_comprehensive
//!
//! # Ordering properties only
//! cargo test --test keyspace_comprehensive ordering::
//!
//! # With log output
//! RUST_LOG=debug cargo test --test keyspace_comprehensive -- --nocapture
//! ```

mod common;

mod concurrency;
mod ordering;
mod prefix_properties;
mod roundtrip;
