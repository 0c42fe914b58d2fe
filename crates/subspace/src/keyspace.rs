//! The KeySpace capability set
//!
//! Anything that owns a contiguous, prefix-delimited region of the key
//! space implements [`KeySpace`]. Only the deriving methods
//! ([`KeySpace::sub`], [`KeySpace::sub_tuple`]) require `Sized`, so
//! heterogeneous namespaces can still be handled as `&dyn KeySpace`.

use crate::error::Result;
use strata_core::{ExactRange, Key, KeySelector};
use strata_tuple::{Element, Tuple};

/// A prefix-delimited namespace of keys
///
/// Thread safety: implementations are immutable values and must be safe to
/// share across threads (requires Send + Sync).
pub trait KeySpace: ExactRange + Send + Sync {
    /// The raw prefix shared by every key in this namespace
    fn bytes(&self) -> &[u8];

    /// Derive a nested namespace by appending every element of `tuple`
    ///
    /// The result is always contained by `self`, and
    /// `s.sub_tuple(&tuple![a, b])` equals `s.sub(a)?.sub(b)?`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple cannot be packed.
    fn sub_tuple(&self, tuple: &Tuple) -> Result<Self>
    where
        Self: Sized;

    /// Derive a nested namespace by appending one packed element
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be packed.
    fn sub(&self, element: impl Into<Element>) -> Result<Self>
    where
        Self: Sized,
    {
        self.sub_tuple(&Tuple::from(vec![element.into()]))
    }

    /// Build a storage key: prefix followed by the packed tuple
    ///
    /// No size or depth limit applies here.
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple holds an out-of-range integer.
    fn pack(&self, tuple: &Tuple) -> Result<Key>;

    /// Strip the prefix from `key` and unpack the remainder
    ///
    /// # Errors
    ///
    /// Returns `NotInSubspace` if `key` does not start with the prefix, or
    /// a decode error if the remainder is not a valid packed tuple.
    fn unpack(&self, key: &[u8]) -> Result<Tuple>;

    /// Whether `key` starts with this namespace's prefix
    fn contains(&self, key: &[u8]) -> bool {
        key.starts_with(self.bytes())
    }

    /// First key of the scan range: `prefix + 0x00`
    fn begin_key(&self) -> Key {
        Key::from(self.bytes()).join([0x00])
    }

    /// Exclusive end of the scan range: `prefix + 0xFF`
    fn end_key(&self) -> Key {
        Key::from(self.bytes()).join([0xff])
    }

    /// `first_greater_or_equal(begin_key())`
    fn begin_key_selector(&self) -> KeySelector {
        KeySelector::first_greater_or_equal(self.begin_key())
    }

    /// `first_greater_or_equal(end_key())`
    fn end_key_selector(&self) -> KeySelector {
        KeySelector::first_greater_or_equal(self.end_key())
    }
}
