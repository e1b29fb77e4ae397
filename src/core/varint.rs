//! # Varint Codec
//!
//! Encoding and decoding of unsigned integers as varints: little-endian
//! base-128 groups, 7 payload bits and one continuation bit per byte.
//!
//! ## Wire Format
//! ```text
//! byte = (chunk & 0x7F) | (0x80 if more chunks follow else 0x00)
//! ```
//!
//! Encodings are always canonical/minimal: the byte count equals
//! `ceil(bit_len(value + 1) / 7)`, and value 0 encodes as exactly one zero
//! byte. [`calc_size`] is the oracle for that length: [`encode`] always
//! advances the offset by exactly `calc_size(value)`.
//!
//! All functions operate on caller-owned slices plus explicit offsets and
//! never allocate. Narrow (`u64`) and wide ([`BigUint`]) entry points exist
//! alongside the dispatching [`encode`]/[`decode`] pair; the two
//! representations produce byte-identical output for equal magnitude.
//!
//! ## Security
//! - Every read and write is bounds-checked against the caller's slice
//! - The narrow decoder rejects continuation runs past 10 bytes before
//!   the accumulator can overflow
//! - The dispatching decoder promotes to the wide path after
//!   [`NARROW_DECODE_GROUPS`] bytes, so it can never silently truncate

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

use crate::core::value::{WireValue, MAX_NARROW_VARINT_LEN, NARROW_DECODE_GROUPS};
use crate::error::{Result, WireError};

/// Encode a value as a varint into `buf` starting at `offset`.
///
/// Dispatches to [`encode_narrow`] or [`encode_wide`] on the value's variant.
/// Returns the offset immediately following the last byte written, which
/// allows chaining encodes into one buffer.
///
/// # Errors
/// [`WireError::OffsetOutOfBounds`] if the encoding would run past the end of
/// `buf`. On error the buffer contents between `offset` and the failure point
/// are unspecified (partial write); callers must discard or re-initialize the
/// region before reuse.
pub fn encode(buf: &mut [u8], value: &WireValue, offset: usize) -> Result<usize> {
    match value {
        WireValue::Narrow(v) => encode_narrow(buf, *v, offset),
        WireValue::Wide(v) => encode_wide(buf, v, offset),
    }
}

/// Encode a `u64` as a varint into `buf` starting at `offset`.
///
/// Always writes at least one byte, even for value 0.
pub fn encode_narrow(buf: &mut [u8], mut value: u64, mut offset: usize) -> Result<usize> {
    let len = buf.len();
    loop {
        let Some(slot) = buf.get_mut(offset) else {
            return Err(WireError::OffsetOutOfBounds { offset, len });
        };
        *slot = (value & 0x7F) as u8;
        if value > 0x7F {
            *slot |= 0x80;
        }
        value >>= 7;
        offset += 1;
        if value == 0 {
            return Ok(offset);
        }
    }
}

/// Encode an arbitrary-precision value as a varint into `buf` starting at
/// `offset`.
///
/// Byte-identical to [`encode_narrow`] for magnitudes that fit `u64`.
pub fn encode_wide(buf: &mut [u8], value: &BigUint, mut offset: usize) -> Result<usize> {
    let len = buf.len();
    let mut value = value.clone();
    loop {
        let Some(slot) = buf.get_mut(offset) else {
            return Err(WireError::OffsetOutOfBounds { offset, len });
        };
        // Low 32 bits live in the first digit; an empty digit iterator means zero.
        let low = value.iter_u32_digits().next().unwrap_or(0);
        let mut byte = (low & 0x7F) as u8;
        value >>= 7u32;
        if !value.is_zero() {
            byte |= 0x80;
        }
        *slot = byte;
        offset += 1;
        if value.is_zero() {
            return Ok(offset);
        }
    }
}

/// Decode a varint from `buf` starting at `offset`.
///
/// Returns the decoded value and the number of bytes consumed. The terminator
/// is searched for within [`NARROW_DECODE_GROUPS`] bytes of `offset`; if
/// found, the narrow path produces [`WireValue::Narrow`], otherwise the wide
/// path takes over and the result is [`WireValue::Wide`] even when the final
/// magnitude would still fit the narrow representation. Promotion happens
/// before the narrow accumulator could lose precision, so this entry point
/// never reports [`WireError::ValueTooLarge`].
///
/// # Errors
/// - [`WireError::EmptyInput`] for an empty buffer
/// - [`WireError::OffsetOutOfBounds`] if `offset` is outside the buffer or
///   a continuation run ends before its terminator (truncated input)
pub fn decode(buf: &[u8], offset: usize) -> Result<(WireValue, usize)> {
    check_readable(buf, offset)?;

    let terminated_narrow = buf[offset..]
        .iter()
        .take(NARROW_DECODE_GROUPS)
        .any(|b| b & 0x80 == 0);

    if terminated_narrow {
        let (value, consumed) = decode_narrow(buf, offset)?;
        Ok((WireValue::Narrow(value), consumed))
    } else {
        trace!(offset, "varint terminator beyond narrow budget, decoding wide");
        let (value, consumed) = decode_wide(buf, offset)?;
        Ok((WireValue::Wide(value), consumed))
    }
}

/// Decode a varint from `buf` at `offset` on the narrow (`u64`) path only.
///
/// # Errors
/// In addition to the bounds errors of [`decode`],
/// [`WireError::ValueTooLarge`] if the continuation run is longer than
/// [`MAX_NARROW_VARINT_LEN`] bytes or the final group overflows 64 bits.
pub fn decode_narrow(buf: &[u8], offset: usize) -> Result<(u64, usize)> {
    check_readable(buf, offset)?;

    let len = buf.len();
    let mut result: u64 = 0;
    let mut groups: usize = 0;
    loop {
        if groups >= MAX_NARROW_VARINT_LEN {
            return Err(WireError::ValueTooLarge {
                max_bytes: MAX_NARROW_VARINT_LEN,
            });
        }
        let pos = offset + groups;
        let Some(&byte) = buf.get(pos) else {
            return Err(WireError::OffsetOutOfBounds { offset: pos, len });
        };
        let chunk = u64::from(byte & 0x7F);
        let shift = (7 * groups) as u32;
        // The tenth group starts at bit 63; only its lowest bit fits.
        if shift == 63 && chunk > 1 {
            return Err(WireError::ValueTooLarge {
                max_bytes: MAX_NARROW_VARINT_LEN,
            });
        }
        result |= chunk << shift;
        groups += 1;
        if byte & 0x80 == 0 {
            return Ok((result, groups));
        }
    }
}

/// Decode a varint from `buf` at `offset` on the wide (arbitrary-precision)
/// path, with no magnitude limit.
pub fn decode_wide(buf: &[u8], offset: usize) -> Result<(BigUint, usize)> {
    check_readable(buf, offset)?;

    let len = buf.len();
    let mut result = BigUint::zero();
    let mut groups: usize = 0;
    loop {
        let pos = offset + groups;
        let Some(&byte) = buf.get(pos) else {
            return Err(WireError::OffsetOutOfBounds { offset: pos, len });
        };
        result |= BigUint::from(byte & 0x7F) << (7 * groups);
        groups += 1;
        if byte & 0x80 == 0 {
            return Ok((result, groups));
        }
    }
}

/// Exact byte count of a value's varint encoding.
///
/// The smallest `n` such that `value < 128^n`, with a minimum of 1.
pub fn calc_size(value: &WireValue) -> usize {
    match value {
        WireValue::Narrow(v) => calc_size_narrow(*v),
        WireValue::Wide(v) => calc_size_wide(v),
    }
}

/// Exact byte count of a `u64`'s varint encoding (1 to 10 inclusive).
pub fn calc_size_narrow(value: u64) -> usize {
    // `value | 1` maps 0 to a 1-bit value so the minimum of one byte falls
    // out of the arithmetic.
    let bits = 64 - (value | 1).leading_zeros();
    bits.div_ceil(7) as usize
}

/// Exact byte count of an arbitrary-precision value's varint encoding.
pub fn calc_size_wide(value: &BigUint) -> usize {
    let bits = value.bits().max(1);
    bits.div_ceil(7) as usize
}

fn check_readable(buf: &[u8], offset: usize) -> Result<()> {
    if buf.is_empty() {
        return Err(WireError::EmptyInput);
    }
    if offset >= buf.len() {
        return Err(WireError::OffsetOutOfBounds {
            offset,
            len: buf.len(),
        });
    }
    Ok(())
}
