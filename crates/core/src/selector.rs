//! Key selectors
//!
//! A [`KeySelector`] names a key in the store relative to a reference key
//! without knowing which keys exist. It is resolved by the storage layer,
//! never here.
//!
//! A selector is the triple `(key, or_equal, offset)`. Resolution finds the
//! last key that is less than `key` (or less than or equal to it, when
//! `or_equal` is set) and then moves `offset` keys forward. The four
//! canonical constructors cover the common cases:
//!
//! | Constructor                 | or_equal | offset |
//! |-----------------------------|----------|--------|
//! | `last_less_than`            | false    | 0      |
//! | `last_less_or_equal`        | true     | 0      |
//! | `first_greater_than`        | true     | 1      |
//! | `first_greater_or_equal`    | false    | 1      |

use crate::key::Key;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A reference to a key, resolved relative to the keys present in the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySelector {
    /// Reference key
    pub key: Key,
    /// Whether the reference key itself counts as "less than"
    pub or_equal: bool,
    /// Number of keys to move forward after the base resolution
    pub offset: i32,
}

impl KeySelector {
    /// Create a selector from its raw parts
    pub fn new(key: impl Into<Key>, or_equal: bool, offset: i32) -> Self {
        Self {
            key: key.into(),
            or_equal,
            offset,
        }
    }

    /// The last key strictly less than `key`
    pub fn last_less_than(key: impl Into<Key>) -> Self {
        Self::new(key, false, 0)
    }

    /// The last key less than or equal to `key`
    pub fn last_less_or_equal(key: impl Into<Key>) -> Self {
        Self::new(key, true, 0)
    }

    /// The first key strictly greater than `key`
    pub fn first_greater_than(key: impl Into<Key>) -> Self {
        Self::new(key, true, 1)
    }

    /// The first key greater than or equal to `key`
    pub fn first_greater_or_equal(key: impl Into<Key>) -> Self {
        Self::new(key, false, 1)
    }
}

impl Add<i32> for KeySelector {
    type Output = KeySelector;

    fn add(mut self, rhs: i32) -> KeySelector {
        self.offset = self.offset.saturating_add(rhs);
        self
    }
}

impl Sub<i32> for KeySelector {
    type Output = KeySelector;

    fn sub(mut self, rhs: i32) -> KeySelector {
        self.offset = self.offset.saturating_sub(rhs);
        self
    }
}

impl fmt::Display for KeySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = match (self.or_equal, self.offset) {
            (false, 1) => return write!(f, "first_greater_or_equal({})", self.key),
            (true, 1) => return write!(f, "first_greater_than({})", self.key),
            (false, 0) => return write!(f, "last_less_than({})", self.key),
            (true, 0) => return write!(f, "last_less_or_equal({})", self.key),
            (false, _) => "last_less_than",
            (true, _) => "last_less_or_equal",
        };
        write!(f, "{}({}) + {}", base, self.key, self.offset)
    }
}
