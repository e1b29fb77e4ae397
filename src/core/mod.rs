//! # Core Wire-Format Components
//!
//! The primitive encode/decode operations of tag-length-value binary
//! protocols.
//!
//! ## Components
//! - **Value**: dual narrow/wide integer domain model
//! - **Varint**: base-128 continuation-bit integer codec
//! - **Length-delimited**: payload framing with a varint length prefix
//! - **Tag**: field-number/wire-type packing
//!
//! ## Wire Format
//! ```text
//! varint:  [chunk|0x80] ... [chunk]           (little-endian 7-bit groups)
//! frame:   [varint(len)] [payload(len)]
//! tag:     varint(field_number * 8 + wire_type)
//! ```
//!
//! Every operation is a pure, synchronous function over explicit inputs: no
//! global state, no I/O, and cost strictly bounded by input size.

pub mod length_delimited;
pub mod tag;
pub mod value;
pub mod varint;
