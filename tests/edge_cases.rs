#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Comprehensive edge-case tests for production-grade reliability
//! Tests boundary conditions, error scenarios, and adversarial inputs

use num_bigint::BigUint;
use protowire::core::{length_delimited, varint};
use protowire::core::value::{MAX_NARROW_VARINT_LEN, NARROW_DECODE_GROUPS};
use protowire::{FramerConfig, WireError, WireValue};

// ============================================================================
// VARINT CODEC EDGE CASES
// ============================================================================

#[test]
fn test_decode_empty_buffer_rejected() {
    assert!(matches!(varint::decode(&[], 0), Err(WireError::EmptyInput)));
    assert!(matches!(
        varint::decode_narrow(&[], 0),
        Err(WireError::EmptyInput)
    ));
    assert!(matches!(
        varint::decode_wide(&[], 0),
        Err(WireError::EmptyInput)
    ));
}

#[test]
fn test_decode_offset_at_or_past_end_rejected() {
    let buf = [0x01, 0x02];
    for offset in [2usize, 3, usize::MAX] {
        let result = varint::decode(&buf, offset);
        assert!(
            matches!(result, Err(WireError::OffsetOutOfBounds { offset: o, len: 2 }) if o == offset),
            "offset {offset} should be out of bounds"
        );
    }
}

#[test]
fn test_decode_truncated_continuation_run() {
    // Every byte claims another follows, but the buffer ends.
    let buf = [0xFF, 0xFF, 0xFF];
    let result = varint::decode(&buf, 0);
    assert!(matches!(
        result,
        Err(WireError::OffsetOutOfBounds { offset: 3, len: 3 })
    ));
}

#[test]
fn test_encode_into_undersized_buffer() {
    let mut buf = [0u8; 2];
    // 16384 needs three bytes.
    let result = varint::encode_narrow(&mut buf, 16_384, 0);
    assert!(matches!(
        result,
        Err(WireError::OffsetOutOfBounds { offset: 2, len: 2 })
    ));
}

#[test]
fn test_encode_at_offset_leaves_prefix_untouched() {
    let mut buf = [0xEE; 4];
    let end = varint::encode_narrow(&mut buf, 300, 2).expect("encode");
    assert_eq!(end, 4);
    assert_eq!(buf[..2], [0xEE, 0xEE]);
}

#[test]
fn test_narrow_decode_eleven_byte_run_rejected() {
    let buf = [0x80u8; 12];
    let result = varint::decode_narrow(&buf, 0);
    assert!(matches!(
        result,
        Err(WireError::ValueTooLarge { max_bytes }) if max_bytes == MAX_NARROW_VARINT_LEN
    ));
}

#[test]
fn test_narrow_decode_tenth_group_overflow_rejected() {
    // Ten bytes, but the tenth group carries bits past u64's top bit.
    let mut buf = [0x80u8; 10];
    buf[9] = 0x02;
    let result = varint::decode_narrow(&buf, 0);
    assert!(matches!(result, Err(WireError::ValueTooLarge { .. })));
}

#[test]
fn test_dispatching_decode_never_reports_too_large() {
    // The same inputs that overflow the narrow path decode fine through the
    // dispatching entry point, promoted to wide.
    let mut buf = [0xFFu8; 11];
    buf[10] = 0x7F;
    let (value, consumed) = varint::decode(&buf, 0).expect("wide path");
    assert!(value.is_wide());
    assert_eq!(consumed, 11);
    assert!(value.to_biguint() > BigUint::from(u64::MAX));
}

#[test]
fn test_promotion_threshold_is_exact() {
    // Terminator exactly at the narrow budget: narrow.
    let mut at_budget = vec![0x80u8; NARROW_DECODE_GROUPS - 1];
    at_budget.push(0x01);
    let (value, _) = varint::decode(&at_budget, 0).expect("decode");
    assert!(value.is_narrow());

    // One byte later: wide, even though the magnitude fits u64.
    let mut past_budget = vec![0x80u8; NARROW_DECODE_GROUPS];
    past_budget.push(0x01);
    let (value, _) = varint::decode(&past_budget, 0).expect("decode");
    assert!(value.is_wide());
    assert!(value.to_u64().is_ok(), "magnitude still fits, only the variant changed");
}

#[test]
fn test_decode_at_offset_ignores_leading_bytes() {
    let buf = [0xFF, 0xFF, 0x05];
    let (value, consumed) = varint::decode(&buf, 2).expect("decode");
    assert_eq!(value, WireValue::Narrow(5));
    assert_eq!(consumed, 1);
}

// ============================================================================
// LENGTH-DELIMITED FRAMER EDGE CASES
// ============================================================================

#[test]
fn test_frame_empty_payload_rejected() {
    assert!(matches!(
        length_delimited::encode(&[]),
        Err(WireError::EmptyInput)
    ));
}

#[test]
fn test_frame_payload_over_default_cap_rejected() {
    let oversized = vec![0u8; 16 * 1024 * 1024 + 1];
    let result = length_delimited::encode(&oversized);
    assert!(matches!(
        result,
        Err(WireError::PayloadTooLong { len, max })
            if len == 16 * 1024 * 1024 + 1 && max == 16 * 1024 * 1024
    ));
}

#[test]
fn test_frame_payload_at_custom_cap_accepted() {
    let config = FramerConfig {
        max_payload_size: 5,
    };
    let framed = length_delimited::encode_with(b"Hello", &config).expect("at cap");
    assert_eq!(framed.len(), 6);
}

#[test]
fn test_unframe_empty_buffer_rejected() {
    assert!(matches!(
        length_delimited::decode(&[], 0),
        Err(WireError::EmptyInput)
    ));
}

#[test]
fn test_unframe_one_byte_buffer_rejected() {
    assert!(matches!(
        length_delimited::decode(&[5], 0),
        Err(WireError::BufferTooShortForLength { len: 1 })
    ));
}

#[test]
fn test_unframe_declared_length_past_buffer_rejected() {
    // Claims 100 payload bytes, provides 3.
    let buf = [100u8, 1, 2, 3];
    let result = length_delimited::decode(&buf, 0);
    assert!(matches!(
        result,
        Err(WireError::BufferTooShortForPayload {
            needed: 101,
            available: 4
        })
    ));
}

#[test]
fn test_unframe_declared_zero_length_rejected() {
    // A zero length prefix contradicts the framer's non-empty contract.
    let buf = [0u8, 0xAA];
    assert!(matches!(
        length_delimited::decode(&buf, 0),
        Err(WireError::EmptyInput)
    ));
}

#[test]
fn test_unframe_adversarial_huge_length_prefix() {
    // A 10-byte prefix declaring a near-2^64 length must fail cleanly,
    // not allocate or wrap around.
    let mut buf = vec![0xFFu8; 9];
    buf.push(0x01);
    buf.extend_from_slice(&[0xAA; 16]);
    let result = length_delimited::decode(&buf, 0);
    assert!(matches!(
        result,
        Err(WireError::BufferTooShortForPayload { .. })
    ));
}

#[test]
fn test_unframe_back_to_back_frames() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&length_delimited::encode(b"first").expect("encode"));
    buf.extend_from_slice(&length_delimited::encode(b"second").expect("encode"));

    let (first, consumed) = length_delimited::decode(&buf, 0).expect("first frame");
    assert_eq!(first, b"first");
    let (second, consumed_second) =
        length_delimited::decode(&buf, consumed).expect("second frame");
    assert_eq!(second, b"second");
    assert_eq!(consumed + consumed_second, buf.len());
}

#[test]
fn test_unframe_offset_out_of_bounds() {
    let framed = length_delimited::encode(b"Hi").expect("encode");
    let result = length_delimited::decode(&framed, framed.len());
    assert!(matches!(result, Err(WireError::OffsetOutOfBounds { .. })));
}

// ============================================================================
// ERROR REPORTING
// ============================================================================

#[test]
fn test_errors_carry_offending_details() {
    let err = varint::decode(&[0x01], 9).expect_err("out of bounds");
    assert_eq!(
        err.to_string(),
        "Offset 9 is out of bounds for a buffer of length 1"
    );

    let err = length_delimited::decode(&[100, 1, 2, 3], 0).expect_err("truncated");
    assert_eq!(
        err.to_string(),
        "Buffer is too short for the declared payload: need 101 bytes, have 4"
    );
}

#[test]
fn test_failed_encode_documents_partial_write() {
    // After a failed encode the written region is unspecified; all the
    // contract promises is the error itself and no write past the buffer.
    let mut buf = [0u8; 2];
    let before = buf;
    let result = varint::encode_narrow(&mut buf, u64::MAX, 0);
    assert!(result.is_err());
    assert_ne!(buf, before, "partial write is expected here");
}
