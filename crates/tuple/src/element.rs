//! Tuple elements
//!
//! An [`Element`] is one typed value inside a [`Tuple`]. The ordering
//! defined here is the ordering of the packed bytes: elements compare
//! first by type rank (the numeric order of their type codes), then by
//! value.
//!
//! ## Equality
//!
//! Floating point elements compare by IEEE-754 total order, so equality is
//! bit equality: `-0.0 != 0.0` and `NaN == NaN` (same payload). This is the
//! only definition under which `unpack(pack(t)) == t` holds for every `t`.

use crate::tuple::Tuple;
use crate::typecode;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A single typed value inside a tuple
#[derive(Debug, Clone)]
pub enum Element {
    /// Null value
    Null,
    /// Raw bytes
    Bytes(Vec<u8>),
    /// UTF-8 string
    String(String),
    /// Nested tuple
    Tuple(Tuple),
    /// Signed integer; encodable range is `[-(2^64 - 1), 2^64 - 1]`
    Int(i128),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit floating point
    Double(f64),
    /// Boolean
    Bool(bool),
    /// UUID
    Uuid(Uuid),
}

impl Element {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Null => "Null",
            Element::Bytes(_) => "Bytes",
            Element::String(_) => "String",
            Element::Tuple(_) => "Tuple",
            Element::Int(_) => "Int",
            Element::Float(_) => "Float",
            Element::Double(_) => "Double",
            Element::Bool(_) => "Bool",
            Element::Uuid(_) => "Uuid",
        }
    }

    /// Type rank used for cross-type ordering (the base type code)
    pub fn type_code(&self) -> u8 {
        match self {
            Element::Null => typecode::NULL,
            Element::Bytes(_) => typecode::BYTES,
            Element::String(_) => typecode::STRING,
            Element::Tuple(_) => typecode::NESTED,
            Element::Int(_) => typecode::INT_ZERO,
            Element::Float(_) => typecode::FLOAT,
            Element::Double(_) => typecode::DOUBLE,
            Element::Bool(_) => typecode::FALSE,
            Element::Uuid(_) => typecode::UUID,
        }
    }

    /// Check if this is a null element
    pub fn is_null(&self) -> bool {
        matches!(self, Element::Null)
    }

    /// Get as `&[u8]` if this is a Bytes element
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Element::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Get as `&str` if this is a String element
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as `&Tuple` if this is a nested tuple
    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Element::Tuple(t) => Some(t),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int element that fits
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Element::Int(i) => i64::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Get as u64 if this is a non-negative Int element that fits
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Element::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Get as f32 if this is a Float element
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Element::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as f64 if this is a Double element
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Element::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool element
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as `Uuid` if this is a Uuid element
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Element::Uuid(u) => Some(*u),
            _ => None,
        }
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Element::Null, Element::Null) => Ordering::Equal,
            (Element::Bytes(a), Element::Bytes(b)) => a.cmp(b),
            (Element::String(a), Element::String(b)) => a.cmp(b),
            (Element::Tuple(a), Element::Tuple(b)) => a.cmp(b),
            (Element::Int(a), Element::Int(b)) => a.cmp(b),
            (Element::Float(a), Element::Float(b)) => a.total_cmp(b),
            (Element::Double(a), Element::Double(b)) => a.total_cmp(b),
            (Element::Bool(a), Element::Bool(b)) => a.cmp(b),
            (Element::Uuid(a), Element::Uuid(b)) => a.cmp(b),
            _ => self.type_code().cmp(&other.type_code()),
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_code().hash(state);
        match self {
            Element::Null => {}
            Element::Bytes(b) => b.hash(state),
            Element::String(s) => s.hash(state),
            Element::Tuple(t) => t.hash(state),
            Element::Int(i) => i.hash(state),
            Element::Float(f) => f.to_bits().hash(state),
            Element::Double(d) => d.to_bits().hash(state),
            Element::Bool(b) => b.hash(state),
            Element::Uuid(u) => u.hash(state),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Null => f.write_str("nil"),
            Element::Bytes(bytes) => {
                f.write_str("b\"")?;
                for &b in bytes {
                    match b {
                        b'"' => f.write_str("\\\"")?,
                        b'\\' => f.write_str("\\\\")?,
                        0x20..=0x7e => write!(f, "{}", b as char)?,
                        _ => write!(f, "\\x{:02x}", b)?,
                    }
                }
                f.write_str("\"")
            }
            Element::String(s) => write!(f, "{:?}", s),
            Element::Tuple(t) => write!(f, "{}", t),
            Element::Int(i) => write!(f, "{}", i),
            Element::Float(v) => write!(f, "{:?}f32", v),
            Element::Double(v) => write!(f, "{:?}", v),
            Element::Bool(b) => write!(f, "{}", b),
            Element::Uuid(u) => write!(f, "{}", u.hyphenated()),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<()> for Element {
    fn from(_: ()) -> Self {
        Element::Null
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(v: Option<T>) -> Self {
        v.map_or(Element::Null, Into::into)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::String(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::String(s)
    }
}

impl From<&String> for Element {
    fn from(s: &String) -> Self {
        Element::String(s.clone())
    }
}

impl From<Vec<u8>> for Element {
    fn from(b: Vec<u8>) -> Self {
        Element::Bytes(b)
    }
}

impl From<&[u8]> for Element {
    fn from(b: &[u8]) -> Self {
        Element::Bytes(b.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Element {
    fn from(b: &[u8; N]) -> Self {
        Element::Bytes(b.to_vec())
    }
}

impl From<Tuple> for Element {
    fn from(t: Tuple) -> Self {
        Element::Tuple(t)
    }
}

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Element::Bool(b)
    }
}

impl From<f32> for Element {
    fn from(f: f32) -> Self {
        Element::Float(f)
    }
}

impl From<f64> for Element {
    fn from(f: f64) -> Self {
        Element::Double(f)
    }
}

impl From<Uuid> for Element {
    fn from(u: Uuid) -> Self {
        Element::Uuid(u)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Element {
                fn from(i: $t) -> Self {
                    Element::Int(i as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
