//! Scan range contracts
//!
//! The storage layer scans half-open intervals. Anything that can describe
//! one implements [`Range`] (boundaries as selectors). Anything whose
//! boundaries are concrete keys additionally implements [`ExactRange`].
//!
//! Concrete carriers are [`KeyRange`] (two keys) and [`SelectorRange`]
//! (two selectors).

use crate::key::{Key, KeyError};
use crate::selector::KeySelector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open scan interval expressed as key selectors
pub trait Range {
    /// Begin (inclusive) and end (exclusive) selectors
    fn range_selectors(&self) -> (KeySelector, KeySelector);
}

/// A half-open scan interval with concrete key boundaries
pub trait ExactRange: Range {
    /// Begin (inclusive) and end (exclusive) keys
    fn range_keys(&self) -> (Key, Key);
}

/// `[begin, end)` over concrete keys
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRange {
    /// Inclusive lower bound
    pub begin: Key,
    /// Exclusive upper bound
    pub end: Key,
}

impl KeyRange {
    /// Create a range from its boundaries
    pub fn new(begin: impl Into<Key>, end: impl Into<Key>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// Every key that starts with `prefix`, including `prefix` itself
    ///
    /// Fails if `prefix` is empty or all `0xFF`, because the range would
    /// have no finite end key.
    pub fn prefix(prefix: impl Into<Key>) -> Result<Self, KeyError> {
        let begin = prefix.into();
        let end = begin.strinc()?;
        Ok(Self { begin, end })
    }

    /// Whether `key` lies in `[begin, end)`
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        let key = key.as_ref();
        self.begin.as_bytes() <= key && key < self.end.as_bytes()
    }

    /// True when no key can fall inside the range
    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }
}

impl Range for KeyRange {
    fn range_selectors(&self) -> (KeySelector, KeySelector) {
        (
            KeySelector::first_greater_or_equal(self.begin.clone()),
            KeySelector::first_greater_or_equal(self.end.clone()),
        )
    }
}

impl ExactRange for KeyRange {
    fn range_keys(&self) -> (Key, Key) {
        (self.begin.clone(), self.end.clone())
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

/// `[begin, end)` over key selectors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectorRange {
    /// Selector for the inclusive lower bound
    pub begin: KeySelector,
    /// Selector for the exclusive upper bound
    pub end: KeySelector,
}

impl SelectorRange {
    /// Create a range from its selectors
    pub fn new(begin: KeySelector, end: KeySelector) -> Self {
        Self { begin, end }
    }
}

impl Range for SelectorRange {
    fn range_selectors(&self) -> (KeySelector, KeySelector) {
        (self.begin.clone(), self.end.clone())
    }
}

impl From<KeyRange> for SelectorRange {
    fn from(range: KeyRange) -> Self {
        let (begin, end) = range.range_selectors();
        Self { begin, end }
    }
}
