//! # Integer Domain Model
//!
//! A wire value is logically a single non-negative integer of unbounded
//! magnitude. This module represents it as a tagged variant:
//!
//! - [`WireValue::Narrow`]: magnitudes representable exactly in a native
//!   `u64` (the narrow safe ceiling is `u64::MAX`)
//! - [`WireValue::Wide`]: magnitudes requiring arbitrary-precision arithmetic
//!
//! Construction dispatches on magnitude, so for any given magnitude there is
//! exactly one variant a constructor will pick. The decoder is the one
//! deliberate exception: once a varint runs past the promotion threshold it
//! stays on the wide path and returns `Wide` even when the final magnitude
//! would still fit `u64`, so that no code path can silently truncate.
//! Equality and ordering compare magnitude, not variant, which makes that
//! promotion invisible to callers.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, WireError};

/// Promotion threshold for the dispatching decoder, in 7-bit groups.
///
/// A varint whose terminator byte is not found within this many bytes of the
/// start offset is decoded on the wide path and returned as
/// [`WireValue::Wide`]. Four groups carry 28 bits, safely inside the narrow
/// ceiling, so the narrow accumulator can never overflow before promotion.
pub const NARROW_DECODE_GROUPS: usize = 4;

/// Longest possible narrow varint encoding, in bytes.
///
/// Equals `calc_size(u64::MAX)`: ten 7-bit groups cover 70 bits. The
/// narrow-only decoder rejects longer continuation runs with
/// [`WireError::ValueTooLarge`].
pub const MAX_NARROW_VARINT_LEN: usize = 10;

/// A non-negative integer magnitude in either narrow or wide representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WireValue {
    /// Magnitude fits the native fixed-width representation.
    Narrow(u64),
    /// Magnitude requires arbitrary-precision representation.
    Wide(BigUint),
}

impl WireValue {
    /// Whether this value is in the narrow representation.
    pub fn is_narrow(&self) -> bool {
        matches!(self, WireValue::Narrow(_))
    }

    /// Whether this value is in the wide representation.
    pub fn is_wide(&self) -> bool {
        matches!(self, WireValue::Wide(_))
    }

    /// Narrow this value to a `u64`.
    ///
    /// Succeeds for every `Narrow` value and for `Wide` values whose
    /// magnitude fits the narrow ceiling.
    ///
    /// # Errors
    /// [`WireError::ValueTooLarge`] if the magnitude exceeds `u64::MAX`.
    pub fn to_u64(&self) -> Result<u64> {
        match self {
            WireValue::Narrow(v) => Ok(*v),
            WireValue::Wide(v) => v.to_u64().ok_or(WireError::ValueTooLarge {
                max_bytes: MAX_NARROW_VARINT_LEN,
            }),
        }
    }

    /// The magnitude as an arbitrary-precision integer, whatever the variant.
    pub fn to_biguint(&self) -> BigUint {
        match self {
            WireValue::Narrow(v) => BigUint::from(*v),
            WireValue::Wide(v) => v.clone(),
        }
    }

    /// Number of significant bits in the magnitude (0 for value zero).
    pub fn bit_len(&self) -> u64 {
        match self {
            WireValue::Narrow(v) => u64::from(64 - v.leading_zeros()),
            WireValue::Wide(v) => v.bits(),
        }
    }
}

impl From<u64> for WireValue {
    fn from(v: u64) -> Self {
        WireValue::Narrow(v)
    }
}

impl From<u32> for WireValue {
    fn from(v: u32) -> Self {
        WireValue::Narrow(u64::from(v))
    }
}

impl From<usize> for WireValue {
    fn from(v: usize) -> Self {
        WireValue::Narrow(v as u64)
    }
}

impl From<BigUint> for WireValue {
    /// Dispatches on magnitude: values that fit `u64` become `Narrow`.
    fn from(v: BigUint) -> Self {
        match v.to_u64() {
            Some(narrow) => WireValue::Narrow(narrow),
            None => WireValue::Wide(v),
        }
    }
}

impl PartialEq for WireValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (WireValue::Narrow(a), WireValue::Narrow(b)) => a == b,
            (WireValue::Wide(a), WireValue::Wide(b)) => a == b,
            (WireValue::Narrow(a), WireValue::Wide(b))
            | (WireValue::Wide(b), WireValue::Narrow(a)) => b.to_u64() == Some(*a),
        }
    }
}

impl Eq for WireValue {}

impl PartialEq<u64> for WireValue {
    fn eq(&self, other: &u64) -> bool {
        self == &WireValue::Narrow(*other)
    }
}

impl PartialOrd for WireValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WireValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (WireValue::Narrow(a), WireValue::Narrow(b)) => a.cmp(b),
            (WireValue::Wide(a), WireValue::Wide(b)) => a.cmp(b),
            (WireValue::Narrow(a), WireValue::Wide(b)) => match b.to_u64() {
                Some(b) => a.cmp(&b),
                None => Ordering::Less,
            },
            (WireValue::Wide(a), WireValue::Narrow(b)) => match a.to_u64() {
                Some(a) => a.cmp(b),
                None => Ordering::Greater,
            },
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::Narrow(v) => write!(f, "{v}"),
            WireValue::Wide(v) => write!(f, "{v}"),
        }
    }
}
