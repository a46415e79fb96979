// Prefix varint decoding (SQLite4-style lead-byte ladder).
//
// The lead byte alone decides the encoded length:
//
//   lead       bytes  value
//   0..=240      1    lead
//   241..=248    2    240 + 256 * (lead - 241) + a1
//   249          3    2288 + 256 * a1 + a2
//   250..=255  4..=9  little-endian tail of (lead - 247) bytes
//
// Width-specific truncations of the table:
//   - 32-bit: every lead >= 251 is the 5-byte form (4-byte tail).
//   - 16-bit: the table stops at 249; lead >= 250 is malformed.
//
// The codec is stateless and reads only through `ByteSource`, so bounds
// failures on truncated input come from the source itself.

use log::{debug, trace};

use super::cursor::ByteSource;
use super::error::{DecodeError, Result};

// ---------------------------------------------------------------------------
// Lead-byte thresholds
// ---------------------------------------------------------------------------

/// Largest value stored directly in the lead byte.
pub const SINGLE_BYTE_MAX: u8 = 240;
/// Last lead byte of the 2-byte form.
pub const TWO_BYTE_LEAD_MAX: u8 = 248;
/// Lead byte of the 3-byte form.
pub const THREE_BYTE_LEAD: u8 = 249;
/// Lead byte of the 4-byte form (24-bit tail).
pub const FOUR_BYTE_LEAD: u8 = 250;
/// Lead byte of the 5-byte form (32-bit tail).
pub const FIVE_BYTE_LEAD: u8 = 251;

/// First value of the 3-byte form.
const THREE_BYTE_BASE: u32 = 2288;

/// Maximum encoded length for a 64-bit value.
pub const MAX_VARINT_LEN: usize = 9;

/// Number of little-endian tail bytes following a lead byte >= 250.
#[inline]
fn tail_len(lead: u8) -> usize {
    usize::from(lead - 247)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode the 1..=3 byte forms shared by every width. Returns `Ok(None)`
/// when `a0 >= 250`, leaving only the lead byte consumed.
#[inline]
fn read_short<S: ByteSource + ?Sized>(src: &mut S, a0: u8) -> Result<Option<u32>> {
    match a0 {
        0..=SINGLE_BYTE_MAX => Ok(Some(u32::from(a0))),
        241..=TWO_BYTE_LEAD_MAX => {
            let a1 = src.read_byte()?;
            Ok(Some(240 + 256 * u32::from(a0 - 241) + u32::from(a1)))
        }
        THREE_BYTE_LEAD => {
            let a1 = src.read_byte()?;
            let a2 = src.read_byte()?;
            Ok(Some(THREE_BYTE_BASE + 256 * u32::from(a1) + u32::from(a2)))
        }
        _ => Ok(None),
    }
}

/// Read `n` bytes as a little-endian integer, first byte least significant.
#[inline]
fn read_tail<S: ByteSource + ?Sized>(src: &mut S, n: usize) -> Result<u64> {
    let mut value = 0u64;
    for i in 0..n {
        value |= u64::from(src.read_byte()?) << (8 * i);
    }
    Ok(value)
}

/// Decode a 16-bit varint.
///
/// Only the 1..=3 byte forms are defined at this width; a lead byte of 250
/// or above is a format violation. The 3-byte form reaches 67823, so values
/// past `u16::MAX` wrap to the low 16 bits.
pub fn read_u16<S: ByteSource + ?Sized>(src: &mut S) -> Result<u16> {
    let a0 = src.read_byte()?;
    match read_short(src, a0)? {
        Some(v) => Ok(v as u16),
        None => {
            debug!("varint16: lead byte {a0} out of range for width");
            Err(DecodeError::MalformedVarint { lead: a0, width: 16 })
        }
    }
}

/// Decode a 32-bit varint.
///
/// Any lead byte >= 251 selects the 5-byte form; lead bytes 252..=255 do
/// not extend the tail at this width.
pub fn read_u32<S: ByteSource + ?Sized>(src: &mut S) -> Result<u32> {
    let a0 = src.read_byte()?;
    if let Some(v) = read_short(src, a0)? {
        return Ok(v);
    }
    let n = tail_len(a0.min(FIVE_BYTE_LEAD));
    trace!("varint32: lead {a0}, {n}-byte tail");
    // At most 4 tail bytes, so the value always fits.
    Ok(read_tail(src, n)? as u32)
}

/// Decode a 64-bit varint (1..=9 bytes).
pub fn read_u64<S: ByteSource + ?Sized>(src: &mut S) -> Result<u64> {
    let a0 = src.read_byte()?;
    if let Some(v) = read_short(src, a0)? {
        return Ok(u64::from(v));
    }
    let n = tail_len(a0);
    trace!("varint64: lead {a0}, {n}-byte tail");
    read_tail(src, n)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Total encoded length of a 64-bit varint starting with `lead`.
#[inline]
pub fn encoded_len_u64(lead: u8) -> usize {
    match lead {
        0..=SINGLE_BYTE_MAX => 1,
        241..=TWO_BYTE_LEAD_MAX => 2,
        THREE_BYTE_LEAD => 3,
        _ => 1 + tail_len(lead),
    }
}

/// Total encoded length of a 32-bit varint starting with `lead`.
#[inline]
pub fn encoded_len_u32(lead: u8) -> usize {
    encoded_len_u64(lead.min(FIVE_BYTE_LEAD))
}

/// Total encoded length of a 16-bit varint starting with `lead`, or `None`
/// when the lead byte is undefined at this width.
#[inline]
pub fn encoded_len_u16(lead: u8) -> Option<usize> {
    (lead < FOUR_BYTE_LEAD).then(|| encoded_len_u64(lead))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
