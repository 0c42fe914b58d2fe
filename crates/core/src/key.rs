//! Raw storage keys
//!
//! A [`Key`] is an opaque byte string. Keys are ordered by plain byte-wise
//! comparison, which is the only ordering the storage layer knows about.
//! Everything above this layer (tuples, subspaces) is built so that its
//! logical ordering agrees with this one.
//!
//! ## Contract
//!
//! - Comparison is lexicographic over the raw bytes (`Ord` on `Vec<u8>`)
//! - A key is never interpreted; the prefix of a key is just bytes
//! - `Display` renders printable ASCII as-is and everything else as `\xNN`

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// An ordered, opaque storage key
///
/// # Examples
///
/// ```
/// use strata_core::Key;
///
/// let a = Key::from("apple");
/// let b = Key::from("banana");
/// assert!(a < b);
///
/// // A prefix always sorts before its extensions
/// let prefix = Key::from(&b"app"[..]);
/// assert!(prefix < a);
/// assert!(a.starts_with(&prefix));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Key(Vec<u8>);

impl Key {
    /// Create a key from owned bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The empty key, which sorts before every other key
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the key, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Byte-prefix test
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.0.starts_with(prefix.as_ref())
    }

    /// Concatenate this key with `suffix`, returning a new key
    pub fn join(&self, suffix: impl AsRef<[u8]>) -> Key {
        let suffix = suffix.as_ref();
        let mut bytes = Vec::with_capacity(self.0.len() + suffix.len());
        bytes.extend_from_slice(&self.0);
        bytes.extend_from_slice(suffix);
        Key(bytes)
    }

    /// The immediate successor of this key: `self + 0x00`
    ///
    /// No key sorts strictly between `self` and `self.key_after()`.
    pub fn key_after(&self) -> Key {
        self.join([0x00])
    }

    /// The first key that does not have `self` as a prefix
    ///
    /// Strips trailing `0xFF` bytes and increments the last remaining byte.
    /// Fails when the key is empty or made up entirely of `0xFF` bytes,
    /// since no such key exists.
    ///
    /// ```
    /// use strata_core::Key;
    ///
    /// assert_eq!(Key::from(&b"ab"[..]).strinc().unwrap(), Key::from(&b"ac"[..]));
    /// assert_eq!(Key::from(&b"a\xff"[..]).strinc().unwrap(), Key::from(&b"b"[..]));
    /// assert!(Key::from(&b"\xff\xff"[..]).strinc().is_err());
    /// ```
    pub fn strinc(&self) -> Result<Key, KeyError> {
        let trimmed = match self.0.iter().rposition(|&b| b != 0xFF) {
            Some(idx) => &self.0[..=idx],
            None => return Err(KeyError::NoSuccessor),
        };
        let mut bytes = trimmed.to_vec();
        if let Some(last) = bytes.last_mut() {
            *last += 1;
        }
        Ok(Key(bytes))
    }
}

impl Deref for Key {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for Key {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Key {
    fn from(bytes: Vec<u8>) -> Self {
        Key(bytes)
    }
}

impl From<&[u8]> for Key {
    fn from(bytes: &[u8]) -> Self {
        Key(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Key {
    fn from(bytes: &[u8; N]) -> Self {
        Key(bytes.to_vec())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key(s.as_bytes().to_vec())
    }
}

impl From<Key> for Vec<u8> {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if (0x20..0x7F).contains(&b) && b != b'\\' {
                write!(f, "{}", b as char)?;
            } else if b == b'\\' {
                f.write_str("\\\\")?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// Key manipulation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The key is empty or consists only of `0xFF` bytes
    #[error("Key must contain at least one byte not equal to 0xFF")]
    NoSuccessor,
}

impl KeyError {
    /// Get the reason code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            KeyError::NoSuccessor => "no_successor",
        }
    }
}
