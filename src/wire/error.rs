// Decode error taxonomy.
//
// Every failure in the decode path is fatal for the logical value being
// read: nothing here is retried or substituted with a default.

use thiserror::Error;

/// Result alias used throughout the `wire` module.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// A read of `requested` bytes at `position` would cross the end of a
    /// buffer of `size` bytes.
    #[error("buffer overflow: read of {requested} byte(s) at pos {position} exceeds size {size}")]
    OutOfRange {
        position: usize,
        requested: usize,
        size: usize,
    },

    /// Caller supplied a negative or otherwise nonsensical length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Lead byte has no meaning for the requested integer width.
    #[error("malformed {width}-bit varint: lead byte {lead}")]
    MalformedVarint { lead: u8, width: u32 },

    /// String payload is not well-formed UTF-8.
    #[error("invalid UTF-8 in string at pos {position}: {source}")]
    InvalidUtf8 {
        position: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Message exceeds the configured maximum size.
    #[error("message of {size} bytes exceeds maximum of {max}")]
    MessageTooLarge { size: usize, max: usize },

    /// Message decoded successfully but left unread bytes behind.
    #[error("{remaining} trailing byte(s) after message")]
    TrailingBytes { remaining: usize },

    /// A textual envelope (hex, base64) could not be turned into bytes.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}

impl DecodeError {
    /// True for bounds failures, i.e. truncated or mismatched input.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
