// Bounds-checked read cursor over a caller-owned byte region.
//
// The cursor borrows the buffer and never copies, grows or mutates it.
// Every read funnels through `check_remaining`, so `pos <= buf.len()`
// holds after every call, successful or not.

use std::fmt;

use log::debug;

use super::error::{DecodeError, Result};

// ---------------------------------------------------------------------------
// Byte source trait
// ---------------------------------------------------------------------------

/// A sequential source of single bytes.
///
/// The varint codec reads exclusively through this trait, so a truncated
/// varint surfaces as the source's own bounds failure.
pub trait ByteSource {
    /// Read the next byte and advance past it.
    fn read_byte(&mut self) -> Result<u8>;
}

/// In-memory slice source: reading shrinks the slice from the front.
///
/// The slice does not know how much was read before it, so an `OutOfRange`
/// from this source is relative to the unread remainder: `position` and
/// `size` are both 0 and only `requested` carries information.
impl<'a> ByteSource for &'a [u8] {
    fn read_byte(&mut self) -> Result<u8> {
        let data: &'a [u8] = *self;
        match data.split_first() {
            Some((&b, rest)) => {
                *self = rest;
                Ok(b)
            }
            None => Err(DecodeError::OutOfRange {
                position: 0,
                requested: 1,
                size: 0,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// Read head over a fixed byte region.
///
/// `Cursor` holds no allocation of its own; the buffer must outlive it,
/// which the borrow checker enforces through `'a`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Verify that `n` more bytes can be read. Returns the end offset of
    /// that read.
    #[inline]
    fn check_remaining(&self, n: usize) -> Result<usize> {
        match self.pos.checked_add(n) {
            Some(end) if end <= self.buf.len() => Ok(end),
            _ => {
                debug!("out of range: {n} byte(s) requested, {self}");
                Err(DecodeError::OutOfRange {
                    position: self.pos,
                    requested: n,
                    size: self.buf.len(),
                })
            }
        }
    }

    /// Read one byte.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8> {
        self.check_remaining(1)?;
        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(b)
    }

    /// Look at the next byte without consuming it.
    pub fn peek_byte(&self) -> Result<u8> {
        self.check_remaining(1)?;
        Ok(self.buf[self.pos])
    }

    /// Borrow the next `n` bytes and advance past them (zero-copy).
    pub fn read_slice(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.check_remaining(n)?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Fill `dst` from the buffer and advance by `dst.len()`.
    pub fn read_into(&mut self, dst: &mut [u8]) -> Result<()> {
        let src = self.read_slice(dst.len())?;
        dst.copy_from_slice(src);
        Ok(())
    }

    /// Copy the next `n` bytes into freshly owned storage.
    pub fn read_raw(&mut self, n: usize) -> Result<Vec<u8>> {
        self.read_slice(n).map(<[u8]>::to_vec)
    }

    /// Advance past `n` bytes without reading them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.pos = self.check_remaining(n)?;
        Ok(())
    }

    /// Reset the read position to the start of the buffer.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Bytes left between the read position and the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Bytes read since construction or the last rewind.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Current read offset; same as [`consumed`](Self::consumed).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total size of the underlying region.
    #[inline]
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// True once every byte has been read.
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// The whole underlying region.
    pub fn as_slice(&self) -> &'a [u8] {
        self.buf
    }

    /// The unread tail of the region.
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

impl ByteSource for Cursor<'_> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        Cursor::read_byte(self)
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cursor size:{} pos:{}", self.buf.len(), self.pos)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
