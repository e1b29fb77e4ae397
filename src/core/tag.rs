//! # Tag Codec
//!
//! Packing and unpacking of field tags: a `(field number, wire type)` pair
//! combined into a single integer, transmitted as a varint.
//!
//! ## Wire Format
//! ```text
//! tag = field_number * 8 + wire_type
//! ```
//!
//! Both directions are pure arithmetic; the varint codec handles the actual
//! byte transport. [`decode_tag`] is total and hands back the raw wire-type
//! discriminant uninterpreted, so the reserved slot 7 passes through without
//! error; interpreting it via [`WireType::from_u8`] is the caller's choice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire-type discriminant of an encoded field.
///
/// The low three bits of a tag. Discriminant 7 is the unused/invalid slot and
/// has no variant; [`encode_tag`] can therefore never produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WireType {
    /// Variable-length integer
    Varint = 0,
    /// Fixed 64-bit value
    Fixed64 = 1,
    /// Length-prefixed payload
    LengthDelimited = 2,
    /// Group start marker (deprecated encoding)
    StartGroup = 3,
    /// Group end marker (deprecated encoding)
    EndGroup = 4,
    /// Fixed 32-bit value
    Fixed32 = 5,
    /// Reserved discriminant
    Reserved = 6,
}

impl WireType {
    /// Get the wire-type discriminant byte
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Interpret a discriminant byte as a wire type
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            6 => Some(WireType::Reserved),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            WireType::Varint => "Varint",
            WireType::Fixed64 => "Fixed64",
            WireType::LengthDelimited => "LengthDelimited",
            WireType::StartGroup => "StartGroup",
            WireType::EndGroup => "EndGroup",
            WireType::Fixed32 => "Fixed32",
            WireType::Reserved => "Reserved",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pack a field number and wire type into a single tag value.
///
/// The caller guarantees the field number is small enough that the packed
/// value fits `u64` (field numbers above `2^61 - 1` would overflow).
pub fn encode_tag(field_number: u64, wire_type: WireType) -> u64 {
    field_number * 8 + u64::from(wire_type.as_u8())
}

/// Unpack a tag value into its field number and raw wire-type discriminant.
///
/// Total function: discriminant 7 is returned as-is, uninterpreted.
pub fn decode_tag(tag: u64) -> (u64, u8) {
    (tag / 8, (tag % 8) as u8)
}
