//! # protowire
//!
//! Wire-format primitives for tag-length-value binary protocols.
//!
//! This crate provides the byte-level encoding layer that message schemas are
//! built on top of: a canonical varint codec, length-delimited payload
//! framing, and field-tag packing, compatible with the Protocol Buffers wire
//! format.
//!
//! ## Features
//! - **Canonical varints**: minimal encodings only, with an exact size oracle
//! - **Dual value model**: transparent promotion from native `u64` to
//!   arbitrary-precision once a magnitude outgrows the narrow representation
//! - **Zero-copy framing**: frame decoding returns a view into the caller's
//!   buffer, never a copy
//! - **Strict bounds validation**: adversarial or truncated input surfaces as
//!   typed errors, never as panics or silent truncation
//!
//! ## Scope
//! No schema layer, reflection, code generation, or transport lives here;
//! `Fixed32`/`Fixed64`/group wire types are named discriminants only. Every
//! operation is pure and synchronous: callers own all buffers, and two calls
//! touching disjoint buffer regions are safe to run concurrently by
//! construction.
//!
//! ## Example
//! ```rust
//! use protowire::{length_delimited, varint, WireValue};
//!
//! # fn main() -> protowire::Result<()> {
//! // Varints with explicit buffers and offsets.
//! let mut buf = [0u8; 2];
//! let end = varint::encode_narrow(&mut buf, 129, 0)?;
//! assert_eq!(buf[..end], [0x81, 0x01]);
//! let (value, consumed) = varint::decode(&buf, 0)?;
//! assert_eq!(value, WireValue::Narrow(129));
//! assert_eq!(consumed, 2);
//!
//! // Length-delimited framing.
//! let framed = length_delimited::encode(b"Hello")?;
//! let (payload, consumed) = length_delimited::decode(&framed, 0)?;
//! assert_eq!(payload, b"Hello");
//! assert_eq!(consumed, framed.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;

// Re-export the primary API surface at the crate root
pub use self::config::FramerConfig;
pub use self::core::tag::{decode_tag, encode_tag, WireType};
pub use self::core::value::WireValue;
pub use self::core::{length_delimited, tag, value, varint};
pub use self::error::{Result, WireError};
