//! The Subspace value type
//!
//! A [`Subspace`] is an immutable byte prefix. Deriving a child appends a
//! packed tuple to the prefix, so a child's keys are always inside its
//! parent and containment reduces to a byte-prefix test.
//!
//! ## Scan Range
//!
//! The scan range of a subspace with prefix `p` is `[p + 0x00, p + 0xFF)`.
//! The bare prefix `p` is outside it: the range enumerates keys strictly
//! within the namespace. Use [`KeyRange::prefix`] to include `p` as well.

use crate::error::{Result, SubspaceError};
use crate::keyspace::KeySpace;
use serde::{Deserialize, Serialize};
use std::fmt;
use strata_core::{ExactRange, Key, KeyRange, KeySelector, Limits, Range};
use strata_tuple::Tuple;
use tracing::{debug, trace};

/// An immutable, prefix-delimited namespace
///
/// # Examples
///
/// ```
/// use strata_subspace::{KeySpace, Subspace};
/// use strata_tuple::tuple;
///
/// let users = Subspace::root().sub("users").unwrap();
/// let alice = users.sub(42).unwrap();
///
/// let key = alice.pack(&tuple!["email"]).unwrap();
/// assert!(users.contains(&key));
/// assert_eq!(alice.unpack(&key).unwrap(), tuple!["email"]);
/// assert_eq!(users.unpack(&key).unwrap(), tuple![42, "email"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subspace {
    prefix: Key,
}

impl Subspace {
    /// The subspace with an empty prefix, covering the entire key space
    pub fn root() -> Self {
        Self { prefix: Key::empty() }
    }

    /// A subspace whose prefix is exactly `bytes`
    ///
    /// The bytes are copied; later changes to the caller's buffer do not
    /// affect the subspace.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            prefix: Key::from(bytes.as_ref()),
        }
    }

    /// A subspace whose prefix is the packed form of `tuple`
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple cannot be packed.
    pub fn from_tuple(tuple: &Tuple) -> Result<Self> {
        Ok(Self {
            prefix: Key::new(tuple.pack()?),
        })
    }

    /// The prefix as a key
    pub fn key(&self) -> &Key {
        &self.prefix
    }

    /// Pack `tuple` under this prefix, enforcing `limits`
    ///
    /// Unlike [`KeySpace::pack`], this checks both the nesting depth and the
    /// length of the finished key.
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple nests too deeply, holds an integer out
    /// of range, or the resulting key exceeds `limits.max_key_bytes`.
    pub fn pack_with_limits(&self, tuple: &Tuple, limits: &Limits) -> Result<Key> {
        let mut bytes = self.prefix.as_bytes().to_vec();
        tuple.pack_into(&mut bytes, limits)?;
        let key = Key::new(bytes);
        limits.validate_key(&key)?;
        Ok(key)
    }

    /// Unpack `key` relative to this prefix, enforcing `limits`
    ///
    /// # Errors
    ///
    /// Returns `NotInSubspace` for keys outside the prefix, otherwise any
    /// decode error of the suffix.
    pub fn unpack_with_limits(&self, key: &[u8], limits: &Limits) -> Result<Tuple> {
        let Some(suffix) = key.strip_prefix(self.prefix.as_bytes()) else {
            let key = Key::from(key);
            debug!(target: "strata::subspace", key = %key, prefix = %self.prefix, "Key outside subspace");
            return Err(SubspaceError::NotInSubspace {
                key,
                prefix: self.prefix.clone(),
            });
        };
        Ok(Tuple::unpack_with_limits(suffix, limits)?)
    }

    /// The scan range of every tuple under this prefix that extends `tuple`
    ///
    /// Returns `[prefix + pack(tuple) + 0x00, prefix + pack(tuple) + 0xFF)`.
    /// With an empty tuple this is the subspace's own scan range.
    pub fn range(&self, tuple: &Tuple) -> Result<KeyRange> {
        let base = self.pack(tuple)?;
        Ok(KeyRange::new(base.join([0x00]), base.join([0xff])))
    }
}

impl KeySpace for Subspace {
    fn bytes(&self) -> &[u8] {
        self.prefix.as_bytes()
    }

    fn sub_tuple(&self, tuple: &Tuple) -> Result<Self> {
        let derived = Self {
            prefix: self.pack(tuple)?,
        };
        trace!(target: "strata::subspace", parent = %self.prefix, prefix = %derived.prefix, "Derived subspace");
        Ok(derived)
    }

    fn pack(&self, tuple: &Tuple) -> Result<Key> {
        let mut bytes = self.prefix.as_bytes().to_vec();
        tuple.pack_into(&mut bytes, &Limits::unbounded())?;
        Ok(Key::new(bytes))
    }

    fn unpack(&self, key: &[u8]) -> Result<Tuple> {
        self.unpack_with_limits(key, &Limits::unbounded())
    }
}

impl Range for Subspace {
    fn range_selectors(&self) -> (KeySelector, KeySelector) {
        (self.begin_key_selector(), self.end_key_selector())
    }
}

impl ExactRange for Subspace {
    fn range_keys(&self) -> (Key, Key) {
        (self.begin_key(), self.end_key())
    }
}

impl From<&Subspace> for KeyRange {
    fn from(subspace: &Subspace) -> Self {
        KeyRange::new(subspace.begin_key(), subspace.end_key())
    }
}

impl From<&Subspace> for Key {
    fn from(subspace: &Subspace) -> Self {
        subspace.prefix.clone()
    }
}

impl From<Subspace> for Key {
    fn from(subspace: Subspace) -> Self {
        subspace.prefix
    }
}

impl AsRef<[u8]> for Subspace {
    fn as_ref(&self) -> &[u8] {
        self.prefix.as_bytes()
    }
}

impl fmt::Display for Subspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subspace({})", self.prefix)
    }
}
