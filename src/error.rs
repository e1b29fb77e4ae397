//! # Error Types
//!
//! Comprehensive error handling for the wire-format codec layer.
//!
//! This module defines all error variants that can occur while encoding or
//! decoding wire-format primitives, from caller misuse (an offset outside the
//! buffer) to malformed or truncated input.
//!
//! ## Error Categories
//! - **Input Errors**: Empty buffers, offsets outside the readable range
//! - **Representation Errors**: Values that do not fit the narrow (fixed-width) representation
//! - **Framing Errors**: Payload size violations, buffers truncated mid-frame
//! - **Configuration Errors**: Invalid framer configuration
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! Every variant carries the offending value, offset, or length, so a caller
//! can distinguish malformed input from a programming mistake from a
//! transport-truncation condition. Errors are detected synchronously and are
//! local to the failing call; these are deterministic transforms, so retrying
//! the same input cannot succeed.
//!
//! ## Example Usage
//! ```rust
//! use protowire::error::WireError;
//! use protowire::core::varint;
//!
//! match varint::decode(&[], 0) {
//!     Err(WireError::EmptyInput) => {} // expected for an empty buffer
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

// WireError is the primary error type for all codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireError {
    #[error("Input buffer is empty")]
    EmptyInput,

    #[error("Offset {offset} is out of bounds for a buffer of length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("Value does not fit the narrow representation (more than {max_bytes} varint bytes)")]
    ValueTooLarge { max_bytes: usize },

    #[error("Payload too long: {len} bytes (maximum {max})")]
    PayloadTooLong { len: usize, max: usize },

    #[error("Buffer of length {len} is too short to contain a length prefix")]
    BufferTooShortForLength { len: usize },

    #[error("Buffer is too short for the declared payload: need {needed} bytes, have {available}")]
    BufferTooShortForPayload { needed: u64, available: u64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using WireError
pub type Result<T> = std::result::Result<T, WireError>;
