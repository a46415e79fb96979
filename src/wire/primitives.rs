// Typed reads layered on the cursor and the varint codec.
//
// Integers and floats are always varint-coded on the wire, never raw
// fixed-width bytes. Floats travel as the unsigned varint of their IEEE-754
// bit pattern.

use super::cursor::Cursor;
use super::error::{DecodeError, Result};
use super::{varint, zigzag};

impl<'a> Cursor<'a> {
    // -- unsigned --------------------------------------------------------

    /// 16-bit varint.
    pub fn read_u16(&mut self) -> Result<u16> {
        varint::read_u16(self)
    }

    /// 32-bit varint.
    pub fn read_u32(&mut self) -> Result<u32> {
        varint::read_u32(self)
    }

    /// 64-bit varint.
    pub fn read_u64(&mut self) -> Result<u64> {
        varint::read_u64(self)
    }

    // -- signed ----------------------------------------------------------

    /// Zigzag 16-bit varint.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_u16().map(zigzag::decode_u16)
    }

    /// Zigzag 32-bit varint.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_u32().map(zigzag::decode_u32)
    }

    /// Zigzag 64-bit varint.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_u64().map(zigzag::decode_u64)
    }

    /// A single raw byte reinterpreted as signed.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_byte().map(|b| b as i8)
    }

    // -- floating point --------------------------------------------------

    /// `f32` from the bit pattern carried in a 32-bit varint.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_u32().map(f32::from_bits)
    }

    /// `f64` from the bit pattern carried in a 64-bit varint.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_u64().map(f64::from_bits)
    }

    // -- misc scalars ----------------------------------------------------

    /// Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_byte().map(|b| b != 0)
    }

    /// A single byte widened to the Unicode scalar of the same value.
    pub fn read_char(&mut self) -> Result<char> {
        self.read_byte().map(char::from)
    }

    // -- text and blobs --------------------------------------------------

    /// Length-prefixed UTF-8 text, borrowed from the buffer.
    ///
    /// The prefix is a 16-bit varint byte count. On invalid UTF-8 the payload
    /// is still consumed.
    pub fn read_str(&mut self) -> Result<&'a str> {
        let len = usize::from(self.read_u16()?);
        if len == 0 {
            return Ok("");
        }
        let position = self.position();
        let bytes = self.read_slice(len)?;
        std::str::from_utf8(bytes).map_err(|source| DecodeError::InvalidUtf8 { position, source })
    }

    /// Length-prefixed UTF-8 text. A zero length yields an empty string.
    ///
    /// Ill-formed sequences are replaced with U+FFFD rather than rejected;
    /// use [`read_str`](Self::read_str) for strict validation.
    pub fn read_string(&mut self) -> Result<String> {
        let len = usize::from(self.read_u16()?);
        if len == 0 {
            return Ok(String::new());
        }
        let bytes = self.read_slice(len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Copy `count` raw bytes.
    ///
    /// `count` is signed because lengths usually come from decoded message
    /// fields; a negative value is rejected without touching the cursor.
    pub fn read_bytes(&mut self, count: i32) -> Result<Vec<u8>> {
        let n = usize::try_from(count)
            .map_err(|_| DecodeError::InvalidArgument(format!("negative byte count {count}")))?;
        self.read_raw(n)
    }

    /// 16-bit length prefix followed by that many bytes, borrowed.
    ///
    /// A zero length means the field is absent (`None`), which is distinct
    /// from a present but empty field.
    pub fn read_length_prefixed_slice(&mut self) -> Result<Option<&'a [u8]>> {
        match self.read_u16()? {
            0 => Ok(None),
            len => self.read_slice(usize::from(len)).map(Some),
        }
    }

    /// Owned variant of [`read_length_prefixed_slice`](Self::read_length_prefixed_slice).
    pub fn read_length_prefixed_bytes(&mut self) -> Result<Option<Vec<u8>>> {
        match self.read_u16()? {
            0 => Ok(None),
            len => self.read_bytes(i32::from(len)).map(Some),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
