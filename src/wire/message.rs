// Structured message dispatch.
//
// A message type decodes itself by reading its fields from a cursor in
// declaration order, mirroring whatever wrote them. The cursor does all the
// bounds checking; implementations only sequence primitive reads.

use log::debug;

use super::config::WireConfig;
use super::cursor::Cursor;
use super::error::{DecodeError, Result};

/// A type that can populate itself from a cursor.
///
/// Implementations must read exactly the fields their encoder wrote, in the
/// same order. There is no schema on the wire, so a mismatch shows up as
/// wrong values or an `OutOfRange` failure rather than a type error.
///
/// ```
/// use wirecursor::wire::{Cursor, WireMessage, Result};
///
/// #[derive(Default)]
/// struct Ping {
///     seq: u32,
///     name: String,
/// }
///
/// impl WireMessage for Ping {
///     fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> Result<()> {
///         self.seq = cursor.read_u32()?;
///         self.name = cursor.read_string()?;
///         Ok(())
///     }
/// }
///
/// let bytes = [7u8, 2, b'h', b'i'];
/// let ping: Ping = Cursor::new(&bytes).read().unwrap();
/// assert_eq!(ping.seq, 7);
/// assert_eq!(ping.name, "hi");
/// ```
pub trait WireMessage: Default {
    /// Read this message's fields from `cursor` into `self`.
    fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> Result<()>;
}

impl Cursor<'_> {
    /// Build a default `T` and let it populate itself from this cursor.
    pub fn read<T: WireMessage>(&mut self) -> Result<T> {
        let mut msg = T::default();
        msg.deserialize(self)?;
        Ok(msg)
    }
}

// ---------------------------------------------------------------------------
// Top-level helpers
// ---------------------------------------------------------------------------

/// Decode one message occupying `bytes`, applying `config` limits.
pub fn decode_message<T: WireMessage>(bytes: &[u8], config: &WireConfig) -> Result<T> {
    config.check_size(bytes.len())?;
    let mut cursor = Cursor::new(bytes);
    let msg = cursor.read::<T>()?;
    let remaining = cursor.remaining();
    if remaining > 0 {
        debug!("message left {remaining} trailing byte(s), {cursor}");
        if config.reject_trailing {
            return Err(DecodeError::TrailingBytes { remaining });
        }
    }
    Ok(msg)
}

/// Decode one message with the default limits.
pub fn from_bytes<T: WireMessage>(bytes: &[u8]) -> Result<T> {
    decode_message(bytes, &WireConfig::default())
}

/// Decode one message from a hex string (whitespace is ignored).
pub fn from_hex<T: WireMessage>(text: &str) -> Result<T> {
    from_bytes(&hex_to_bytes(text)?)
}

/// Decode one message from standard base64 text.
#[cfg(feature = "base64")]
pub fn from_base64<T: WireMessage>(text: &str) -> Result<T> {
    from_bytes(&base64_to_bytes(text)?)
}

/// Parse hex text into bytes. ASCII whitespace between digits is skipped.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if digits.len() % 2 != 0 {
        return Err(DecodeError::InvalidEncoding(
            "hex string must have even length".into(),
        ));
    }
    digits
        .chunks_exact(2)
        .map(|pair| Ok((hex_nibble(pair[0])? << 4) | hex_nibble(pair[1])?))
        .collect()
}

fn hex_nibble(b: u8) -> Result<u8> {
    char::from(b)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| DecodeError::InvalidEncoding(format!("invalid hex digit {:?}", char::from(b))))
}

/// Parse standard (padded) base64 text into bytes.
#[cfg(feature = "base64")]
pub fn base64_to_bytes(text: &str) -> Result<Vec<u8>> {
    use base64::Engine;

    base64::engine::general_purpose::STANDARD
        .decode(text.trim())
        .map_err(|e| DecodeError::InvalidEncoding(format!("base64: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
