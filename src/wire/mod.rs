// Decoding cursor for the compact network wire format.
//
// # Modules
//
// - `cursor`     — Bounds-checked read head over a borrowed byte region
// - `varint`     — Prefix varint decoding at 16/32/64-bit widths
// - `zigzag`     — Signed integer recovery from unsigned varints
// - `primitives` — Typed reads (integers, floats, strings, byte blocks)
// - `message`    — `WireMessage` dispatch and top-level decode helpers
// - `config`     — Message size limits
// - `layout`     — Schema-less field layouts for inspection
// - `error`      — Decode error taxonomy

pub mod config;
pub mod cursor;
pub mod error;
pub mod layout;
pub mod message;
pub mod primitives;
pub mod varint;
pub mod zigzag;

// Re-export key types for convenience.
pub use config::{MAX_MESSAGE_SIZE, WireConfig};
pub use cursor::{ByteSource, Cursor};
pub use error::{DecodeError, Result};
pub use layout::{Field, FieldKind, decode_layout, parse_layout};
pub use message::{WireMessage, decode_message, from_bytes, from_hex};

#[cfg(feature = "base64")]
pub use message::from_base64;
