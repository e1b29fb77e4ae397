//! # Length-Delimited Framing
//!
//! Wraps an opaque payload with its varint-encoded byte length and unwraps it
//! again without copying.
//!
//! ## Wire Format
//! ```text
//! [varint(payload length)] [payload bytes]
//! ```
//!
//! Encoding allocates exactly `prefix + payload` bytes and copies the payload
//! once; decoding returns a zero-copy view into the caller's buffer together
//! with the total bytes consumed, leaving trailing bytes untouched. The
//! framer forbids zero-length payloads by design, in both directions.
//!
//! ## Security
//! - Payloads are capped (default 16 MB, see [`FramerConfig`]) so a single
//!   frame cannot exhaust memory
//! - The declared length is validated against the buffer before any slicing

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::config::FramerConfig;
use crate::core::varint;
use crate::error::{Result, WireError};

/// Frame `payload` with its varint-encoded length, using the default
/// [`FramerConfig`] size cap.
///
/// Returns a freshly allocated buffer; the payload bytes are copied, never
/// aliased.
///
/// # Errors
/// - [`WireError::EmptyInput`] for an empty payload
/// - [`WireError::PayloadTooLong`] if the payload exceeds the size cap
pub fn encode(payload: &[u8]) -> Result<Bytes> {
    encode_with(payload, &FramerConfig::default())
}

/// Frame `payload` with its varint-encoded length under a caller-supplied
/// size cap.
pub fn encode_with(payload: &[u8], config: &FramerConfig) -> Result<Bytes> {
    if payload.is_empty() {
        return Err(WireError::EmptyInput);
    }
    if payload.len() > config.max_payload_size {
        return Err(WireError::PayloadTooLong {
            len: payload.len(),
            max: config.max_payload_size,
        });
    }

    let prefix_size = varint::calc_size_narrow(payload.len() as u64);
    let mut buf = BytesMut::zeroed(prefix_size + payload.len());
    varint::encode_narrow(&mut buf, payload.len() as u64, 0)?;
    buf[prefix_size..].copy_from_slice(payload);

    trace!(payload_len = payload.len(), prefix_size, "encoded length-delimited frame");
    Ok(buf.freeze())
}

/// Unwrap a length-delimited frame from `buf` starting at `offset`.
///
/// Decodes the varint length prefix, validates that the declared payload is
/// fully present, and returns a zero-copy view of the payload plus
/// `bytes_consumed = prefix_size + length`. Bytes after the frame are left
/// untouched, so frames can be read back to back by advancing the offset.
///
/// # Errors
/// - [`WireError::EmptyInput`] for an empty buffer or a declared zero-length
///   payload (the framer forbids empty payloads)
/// - [`WireError::BufferTooShortForLength`] if the buffer cannot hold a
///   length prefix and any payload at all
/// - [`WireError::OffsetOutOfBounds`] if `offset` is outside the buffer
/// - [`WireError::BufferTooShortForPayload`] if the declared length exceeds
///   the bytes remaining after the prefix
pub fn decode(buf: &[u8], offset: usize) -> Result<(&[u8], usize)> {
    if buf.is_empty() {
        return Err(WireError::EmptyInput);
    }
    if buf.len() < 2 {
        return Err(WireError::BufferTooShortForLength { len: buf.len() });
    }

    let (length, prefix_size) = varint::decode(buf, offset)?;
    let length = length.to_u64()?;
    if length == 0 {
        return Err(WireError::EmptyInput);
    }

    let needed = (prefix_size as u64).saturating_add(length);
    let available = (buf.len() - offset) as u64;
    if available < needed {
        return Err(WireError::BufferTooShortForPayload { needed, available });
    }

    // length <= available, so it fits usize.
    let length = length as usize;
    let start = offset + prefix_size;

    trace!(offset, length, prefix_size, "decoded length-delimited frame");
    Ok((&buf[start..start + length], prefix_size + length))
}
