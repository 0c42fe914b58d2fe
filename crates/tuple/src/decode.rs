//! Tuple unpacking
//!
//! The exact reverse of [`crate::encode`]. Decoding is strict: every element
//! must be complete, every variable-length payload terminated, and every
//! integer written at its minimal width. Any byte string that decodes
//! therefore re-encodes to itself.
//!
//! Nested tuples are tracked on an explicit stack rather than by recursion.
//! Callers decoding untrusted keys should still cap depth with
//! [`decode_with_limits`], since the decoded value itself is recursive.

use crate::element::Element;
use crate::encode::uint_mask;
use crate::error::DecodeError;
use crate::tuple::Tuple;
use crate::typecode;
use byteorder::{BigEndian, ByteOrder};
use std::mem;
use strata_core::Limits;
use tracing::debug;
use uuid::Uuid;

/// Unpack bytes
///
/// Nesting depth is unbounded; use [`decode_with_limits`] for untrusted
/// input that should be capped.
pub fn decode(bytes: &[u8]) -> Result<Tuple, DecodeError> {
    decode_with_limits(bytes, &Limits::unbounded())
}

/// Synonym for [`decode`]
pub fn unpack(bytes: &[u8]) -> Result<Tuple, DecodeError> {
    decode(bytes)
}

/// Unpack bytes, enforcing the nesting depth in `limits`
pub fn decode_with_limits(bytes: &[u8], limits: &Limits) -> Result<Tuple, DecodeError> {
    let mut decoder = Decoder {
        input: bytes,
        pos: 0,
        limits,
    };
    decoder.tuple().map_err(|e| {
        debug!(target: "strata::tuple", error = %e, len = bytes.len(), "Tuple decode failed");
        e
    })
}

struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
    limits: &'a Limits,
}

/// A tuple whose terminator has not been read yet
#[derive(Default)]
struct Frame {
    /// Offset of the nested type code (unused for the outermost tuple)
    offset: usize,
    elements: Vec<Element>,
}

impl Decoder<'_> {
    fn tuple(&mut self) -> Result<Tuple, DecodeError> {
        let mut current = Frame::default();
        let mut parents: Vec<Frame> = Vec::new();

        while let Some(&tag) = self.input.get(self.pos) {
            let offset = self.pos;
            match tag {
                typecode::NULL if !parents.is_empty() => {
                    if self.input.get(offset + 1) == Some(&typecode::ESCAPE) {
                        self.pos += 2;
                        current.elements.push(Element::Null);
                    } else {
                        self.pos += 1;
                        if let Some(parent) = parents.pop() {
                            let done = mem::replace(&mut current, parent);
                            current
                                .elements
                                .push(Element::Tuple(Tuple::from(done.elements)));
                        }
                    }
                }
                typecode::NESTED => {
                    self.limits.validate_depth(parents.len() + 1)?;
                    self.pos += 1;
                    let frame = Frame {
                        offset,
                        elements: Vec::new(),
                    };
                    parents.push(mem::replace(&mut current, frame));
                }
                _ => {
                    self.pos += 1;
                    let element = self.scalar(tag, offset)?;
                    current.elements.push(element);
                }
            }
        }

        if !parents.is_empty() {
            return Err(DecodeError::Unterminated {
                kind: "nested tuple",
                offset: current.offset,
            });
        }
        Ok(Tuple::from(current.elements))
    }

    /// Decode any element other than a nested tuple; `tag` is already consumed
    fn scalar(&mut self, tag: u8, offset: usize) -> Result<Element, DecodeError> {
        match tag {
            typecode::NULL => Ok(Element::Null),
            typecode::BYTES => Ok(Element::Bytes(self.escaped(offset, "byte string")?)),
            typecode::STRING => {
                let bytes = self.escaped(offset, "unicode string")?;
                String::from_utf8(bytes)
                    .map(Element::String)
                    .map_err(|_| DecodeError::InvalidUtf8 { offset })
            }
            typecode::NEG_INT_8..=typecode::POS_INT_8 => self.int(tag, offset),
            typecode::FLOAT => {
                let bits = BigEndian::read_u32(self.take(4)?);
                Ok(Element::Float(f32::from_bits(restore_f32_bits(bits))))
            }
            typecode::DOUBLE => {
                let bits = BigEndian::read_u64(self.take(8)?);
                Ok(Element::Double(f64::from_bits(restore_f64_bits(bits))))
            }
            typecode::FALSE => Ok(Element::Bool(false)),
            typecode::TRUE => Ok(Element::Bool(true)),
            typecode::UUID => {
                let mut bytes = [0u8; 16];
                bytes.copy_from_slice(self.take(16)?);
                Ok(Element::Uuid(Uuid::from_bytes(bytes)))
            }
            _ => Err(DecodeError::UnknownTag { tag, offset }),
        }
    }

    /// Read an escaped payload up to and including its terminator
    fn escaped(&mut self, offset: usize, kind: &'static str) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::new();
        loop {
            let rest = &self.input[self.pos..];
            let Some(idx) = rest.iter().position(|&b| b == typecode::NULL) else {
                return Err(DecodeError::Unterminated { kind, offset });
            };
            out.extend_from_slice(&rest[..idx]);
            if rest.get(idx + 1) == Some(&typecode::ESCAPE) {
                out.push(0x00);
                self.pos += idx + 2;
            } else {
                self.pos += idx + 1;
                return Ok(out);
            }
        }
    }

    fn int(&mut self, tag: u8, offset: usize) -> Result<Element, DecodeError> {
        if tag == typecode::INT_ZERO {
            return Ok(Element::Int(0));
        }
        let (len, positive) = if tag > typecode::INT_ZERO {
            ((tag - typecode::INT_ZERO) as usize, true)
        } else {
            ((typecode::INT_ZERO - tag) as usize, false)
        };
        let stored = BigEndian::read_uint(self.take(len)?, len);
        let magnitude = if positive {
            stored
        } else {
            !stored & uint_mask(len)
        };
        // The leading magnitude byte must be non-zero, otherwise a shorter
        // encoding of the same value exists.
        if magnitude >> (8 * (len - 1)) == 0 {
            return Err(DecodeError::NonCanonicalInteger { offset });
        }
        if positive {
            Ok(Element::Int(magnitude as i128))
        } else {
            Ok(Element::Int(-(magnitude as i128)))
        }
    }

    fn take(&mut self, needed: usize) -> Result<&[u8], DecodeError> {
        let available = self.input.len() - self.pos;
        if available < needed {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                needed,
                available,
            });
        }
        let slice = &self.input[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(slice)
    }
}

fn restore_f32_bits(bits: u32) -> u32 {
    if bits & 0x8000_0000 != 0 {
        bits ^ 0x8000_0000
    } else {
        !bits
    }
}

fn restore_f64_bits(bits: u64) -> u64 {
    if bits & 0x8000_0000_0000_0000 != 0 {
        bits ^ 0x8000_0000_0000_0000
    } else {
        !bits
    }
}
