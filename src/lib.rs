//! Wirecursor: a bounds-checked decoding cursor for a compact network
//! wire format.
//!
//! The crate provides:
//! - A borrowed, never-overreading byte cursor (`wire::Cursor`)
//! - Prefix varint and zigzag decoding at 16/32/64-bit widths
//! - Typed reads for floats, strings and length-prefixed byte blocks
//! - The `WireMessage` trait for structured messages
//! - An optional inspection CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use wirecursor::wire::Cursor;
//!
//! // u32 300, i32 -2, "hi", absent bytes
//! let buf = [241, 60, 3, 2, b'h', b'i', 0];
//! let mut cursor = Cursor::new(&buf);
//! assert_eq!(cursor.read_u32().unwrap(), 300);
//! assert_eq!(cursor.read_i32().unwrap(), -2);
//! assert_eq!(cursor.read_string().unwrap(), "hi");
//! assert_eq!(cursor.read_length_prefixed_bytes().unwrap(), None);
//! assert_eq!(cursor.remaining(), 0);
//! ```

pub mod wire;

#[cfg(feature = "cli")]
pub mod cli;
