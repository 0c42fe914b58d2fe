//! Tuple packing
//!
//! Every element is written as a type code followed by a type-specific
//! payload, and elements are concatenated with no separators. Variable
//! length payloads are escaped and terminated rather than length-prefixed,
//! which is what makes `pack((a,))` a strict byte prefix of `pack((a, b))`.
//!
//! # Binary Format
//!
//! ```text
//! Null      0x00                         (0x00 0xFF inside a nested tuple)
//! Bytes     0x01 escaped(bytes) 0x00
//! String    0x02 escaped(utf8)  0x00
//! Nested    0x05 elements...    0x00
//! Int       0x14                         zero
//!           0x14+n  be(magnitude)[n]     positive, n = 1..=8
//!           0x14-n  !be(magnitude)[n]    negative, one's complement
//! Float     0x20 ordered(be(bits))[4]
//! Double    0x21 ordered(be(bits))[8]
//! Bool      0x26 | 0x27
//! Uuid      0x30 bytes[16]
//! ```
//!
//! `escaped` writes every `0x00` as `0x00 0xFF`. `ordered` flips every bit
//! of a negative float and only the sign bit of a positive one, so that
//! byte order equals IEEE-754 total order.

use crate::element::Element;
use crate::error::EncodeError;
use crate::tuple::Tuple;
use crate::typecode;
use byteorder::{BigEndian, ByteOrder};
use strata_core::Limits;

/// Pack a tuple
///
/// Nesting depth is unbounded; the only failure is an out-of-range integer.
pub fn encode(tuple: &Tuple) -> Result<Vec<u8>, EncodeError> {
    encode_with_limits(tuple, &Limits::unbounded())
}

/// Synonym for [`encode`]
pub fn pack(tuple: &Tuple) -> Result<Vec<u8>, EncodeError> {
    encode(tuple)
}

/// Pack a tuple, enforcing the nesting depth in `limits`
pub fn encode_with_limits(tuple: &Tuple, limits: &Limits) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    encode_into(tuple, &mut out, limits)?;
    Ok(out)
}

/// Pack a tuple, appending to `out`
///
/// On error, `out` is truncated back to the length it had on entry.
pub fn encode_into(tuple: &Tuple, out: &mut Vec<u8>, limits: &Limits) -> Result<(), EncodeError> {
    let start = out.len();
    let mut encoder = Encoder {
        out: &mut *out,
        limits,
    };
    let result = encoder.tuple(tuple);
    if result.is_err() {
        out.truncate(start);
    }
    result
}

struct Encoder<'a> {
    out: &'a mut Vec<u8>,
    limits: &'a Limits,
}

impl Encoder<'_> {
    /// Walk the tuple with an explicit stack of open nested tuples, so deep
    /// nesting costs heap rather than call stack.
    fn tuple(&mut self, tuple: &Tuple) -> Result<(), EncodeError> {
        let mut open = vec![tuple.iter()];
        loop {
            // The outermost tuple is depth 0, so `levels - 1` is the depth
            // of the tuple on top of the stack.
            let levels = open.len();
            let Some(elements) = open.last_mut() else {
                return Ok(());
            };
            match elements.next() {
                None => {
                    open.pop();
                    if levels > 1 {
                        self.out.push(typecode::NULL);
                    }
                }
                Some(element) => {
                    if let Some(inner) = self.element(element, levels > 1)? {
                        self.limits.validate_depth(levels)?;
                        self.out.push(typecode::NESTED);
                        open.push(inner.iter());
                    }
                }
            }
        }
    }

    /// Write one element, or hand a nested tuple back to the caller to open
    fn element<'t>(
        &mut self,
        element: &'t Element,
        nested: bool,
    ) -> Result<Option<&'t Tuple>, EncodeError> {
        match element {
            Element::Null => {
                self.out.push(typecode::NULL);
                if nested {
                    self.out.push(typecode::ESCAPE);
                }
            }
            Element::Bytes(bytes) => {
                self.out.push(typecode::BYTES);
                self.escaped(bytes);
            }
            Element::String(s) => {
                self.out.push(typecode::STRING);
                self.escaped(s.as_bytes());
            }
            Element::Tuple(inner) => return Ok(Some(inner)),
            Element::Int(value) => self.int(*value)?,
            Element::Float(value) => {
                self.out.push(typecode::FLOAT);
                let mut buf = [0u8; 4];
                BigEndian::write_u32(&mut buf, order_f32_bits(value.to_bits()));
                self.out.extend_from_slice(&buf);
            }
            Element::Double(value) => {
                self.out.push(typecode::DOUBLE);
                let mut buf = [0u8; 8];
                BigEndian::write_u64(&mut buf, order_f64_bits(value.to_bits()));
                self.out.extend_from_slice(&buf);
            }
            Element::Bool(value) => {
                self.out
                    .push(if *value { typecode::TRUE } else { typecode::FALSE });
            }
            Element::Uuid(uuid) => {
                self.out.push(typecode::UUID);
                self.out.extend_from_slice(uuid.as_bytes());
            }
        }
        Ok(None)
    }

    fn escaped(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.out.push(b);
            if b == 0x00 {
                self.out.push(typecode::ESCAPE);
            }
        }
        self.out.push(typecode::NULL);
    }

    fn int(&mut self, value: i128) -> Result<(), EncodeError> {
        if value == 0 {
            self.out.push(typecode::INT_ZERO);
            return Ok(());
        }
        let magnitude = u64::try_from(value.unsigned_abs())
            .map_err(|_| EncodeError::IntegerOutOfRange { value })?;
        let len = int_len(magnitude);
        let mut buf = [0u8; 8];
        if value > 0 {
            self.out.push(typecode::INT_ZERO + len as u8);
            BigEndian::write_uint(&mut buf, magnitude, len);
        } else {
            self.out.push(typecode::INT_ZERO - len as u8);
            BigEndian::write_uint(&mut buf, !magnitude & uint_mask(len), len);
        }
        self.out.extend_from_slice(&buf[..len]);
        Ok(())
    }
}

/// Minimal number of bytes holding a non-zero magnitude
fn int_len(magnitude: u64) -> usize {
    8 - (magnitude.leading_zeros() / 8) as usize
}

/// All-ones mask covering the low `len` bytes
pub(crate) fn uint_mask(len: usize) -> u64 {
    if len >= 8 {
        u64::MAX
    } else {
        (1u64 << (8 * len)) - 1
    }
}

pub(crate) fn order_f32_bits(bits: u32) -> u32 {
    if bits & 0x8000_0000 != 0 {
        !bits
    } else {
        bits ^ 0x8000_0000
    }
}

pub(crate) fn order_f64_bits(bits: u64) -> u64 {
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits ^ 0x8000_0000_0000_0000
    }
}
