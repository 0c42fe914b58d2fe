//! Order-preserving tuple encoding for Strata keys
//!
//! This crate maps ordered sequences of typed values to byte strings whose
//! byte-wise order matches the logical order of the values:
//! - Element: One typed value (null, bytes, string, int, float, bool, uuid, nested tuple)
//! - Tuple: Ordered sequence of elements
//! - encode/pack, decode/unpack: The codec itself
//! - typecode: Wire-level type codes
//! - EncodeError / DecodeError: Codec failures
//!
//! ## Guarantees
//!
//! - `unpack(pack(t)) == t` for every tuple `t` that packs
//! - `t1 < t2` implies `pack(t1) < pack(t2)`
//! - `pack(t)` is a strict byte prefix of `pack(t + [e])`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decode;
pub mod element;
pub mod encode;
pub mod error;
pub mod tuple;
pub mod typecode;

pub use decode::{decode, decode_with_limits, unpack};
pub use element::Element;
pub use encode::{encode, encode_into, encode_with_limits, pack};
pub use error::{DecodeError, EncodeError};
pub use tuple::Tuple;

/// Build a [`Tuple`] from a list of values convertible into [`Element`]
///
/// ```
/// use strata_tuple::{tuple, Element};
///
/// let t = tuple!["users", 42, (), b"raw"];
/// assert_eq!(t[0], Element::String("users".into()));
/// assert_eq!(t[2], Element::Null);
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::Tuple::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Tuple::from(vec![$($crate::Element::from($element)),+])
    };
}
