//! The Tuple type
//!
//! A [`Tuple`] is an ordered sequence of [`Element`]s. Tuples order
//! lexicographically, element by element, and a tuple sorts before every
//! tuple it is a strict prefix of. Packing preserves exactly this ordering.

use crate::decode::{decode, decode_with_limits};
use crate::element::Element;
use crate::encode::{encode, encode_into, encode_with_limits};
use crate::error::{DecodeError, EncodeError};
use std::fmt;
use std::ops::Index;
use strata_core::{Key, KeyRange, Limits};

/// An ordered sequence of typed elements
///
/// # Examples
///
/// ```
/// use strata_tuple::{tuple, Tuple};
///
/// let t = tuple!["users", 42, ()];
/// let packed = t.pack().unwrap();
/// assert_eq!(Tuple::unpack(&packed).unwrap(), t);
///
/// // Packing preserves tuple order
/// assert!(tuple![-5].pack().unwrap() < tuple![-1].pack().unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple(Vec<Element>);

impl Tuple {
    /// Create an empty tuple
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of top-level elements
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty tuple
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the element at `index`
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.0.get(index)
    }

    /// Iterate over the top-level elements
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.0.iter()
    }

    /// Borrow the elements as a slice
    pub fn elements(&self) -> &[Element] {
        &self.0
    }

    /// Consume the tuple, returning its elements
    pub fn into_elements(self) -> Vec<Element> {
        self.0
    }

    /// Append an element
    pub fn push(&mut self, element: impl Into<Element>) {
        self.0.push(element.into());
    }

    /// Builder-style append
    pub fn with(mut self, element: impl Into<Element>) -> Self {
        self.push(element);
        self
    }

    /// A new tuple holding the elements of `self` followed by those of `other`
    pub fn concat(&self, other: &Tuple) -> Tuple {
        let mut elements = Vec::with_capacity(self.len() + other.len());
        elements.extend_from_slice(&self.0);
        elements.extend_from_slice(&other.0);
        Tuple(elements)
    }

    /// Whether the first elements of `self` are exactly `prefix`
    pub fn starts_with(&self, prefix: &Tuple) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Pack into bytes; nesting depth is unbounded
    pub fn pack(&self) -> Result<Vec<u8>, EncodeError> {
        encode(self)
    }

    /// Pack into bytes, enforcing `limits`
    pub fn pack_with_limits(&self, limits: &Limits) -> Result<Vec<u8>, EncodeError> {
        encode_with_limits(self, limits)
    }

    /// Pack, appending to `out`
    ///
    /// On error `out` is restored to its original length.
    pub fn pack_into(&self, out: &mut Vec<u8>, limits: &Limits) -> Result<(), EncodeError> {
        encode_into(self, out, limits)
    }

    /// Unpack bytes; nesting depth is unbounded
    pub fn unpack(bytes: &[u8]) -> Result<Tuple, DecodeError> {
        decode(bytes)
    }

    /// Unpack bytes, enforcing `limits`
    pub fn unpack_with_limits(bytes: &[u8], limits: &Limits) -> Result<Tuple, DecodeError> {
        decode_with_limits(bytes, limits)
    }

    /// The scan range of every tuple that strictly extends this one
    ///
    /// Returns `[pack(self) + 0x00, pack(self) + 0xFF)`. The packed form of
    /// `self` is itself excluded.
    pub fn range(&self) -> Result<KeyRange, EncodeError> {
        let packed = Key::new(self.pack()?);
        Ok(KeyRange::new(packed.join([0x00]), packed.join([0xff])))
    }
}

impl From<Vec<Element>> for Tuple {
    fn from(elements: Vec<Element>) -> Self {
        Tuple(elements)
    }
}

impl From<Tuple> for Vec<Element> {
    fn from(tuple: Tuple) -> Self {
        tuple.0
    }
}

impl FromIterator<Element> for Tuple {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Tuple(iter.into_iter().collect())
    }
}

impl Extend<Element> for Tuple {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for Tuple {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for Tuple {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.0[index]
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        // Single-element tuples keep the trailing comma
        if self.0.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}
