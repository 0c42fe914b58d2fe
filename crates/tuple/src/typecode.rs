//! Type codes of the tuple encoding
//!
//! These values are part of the on-disk key format and MUST NOT change.
//! Keys packed by one process are read by others, so the byte layout is
//! shared with every other implementation of the same tuple layer.
//!
//! Ordering across types follows the numeric order of the codes:
//! Null < Bytes < String < Nested < Int < Float < Double < Bool < Uuid

/// Null; also the terminator of byte strings, unicode strings and nested tuples
pub const NULL: u8 = 0x00;

/// Byte string
pub const BYTES: u8 = 0x01;

/// Unicode (UTF-8) string
pub const STRING: u8 = 0x02;

/// Nested tuple
pub const NESTED: u8 = 0x05;

/// Smallest negative integer code: eight magnitude bytes
pub const NEG_INT_8: u8 = 0x0c;

/// Integer zero; `INT_ZERO + n` / `INT_ZERO - n` carry `n` magnitude bytes
pub const INT_ZERO: u8 = 0x14;

/// Largest positive integer code: eight magnitude bytes
pub const POS_INT_8: u8 = 0x1c;

/// IEEE-754 single precision
pub const FLOAT: u8 = 0x20;

/// IEEE-754 double precision
pub const DOUBLE: u8 = 0x21;

/// Boolean false
pub const FALSE: u8 = 0x26;

/// Boolean true
pub const TRUE: u8 = 0x27;

/// RFC 4122 UUID, 16 raw bytes
pub const UUID: u8 = 0x30;

/// Follows a literal `0x00` inside escaped payloads
pub const ESCAPE: u8 = 0xff;
