// Message size limits and top-level decode settings.
//
// The cursor itself never consults these; they are applied by the message
// helpers (and by transport framing) before a cursor is built.

use super::error::{DecodeError, Result};

/// Default upper bound on an accepted message, in bytes.
pub const MAX_MESSAGE_SIZE: usize = 2048;

/// Settings for decoding a whole message from a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireConfig {
    /// Buffers larger than this are rejected before decoding starts.
    pub max_message_size: usize,
    /// Fail if the message leaves unread bytes in the buffer.
    pub reject_trailing: bool,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            max_message_size: MAX_MESSAGE_SIZE,
            reject_trailing: false,
        }
    }
}

impl WireConfig {
    pub fn with_max_message_size(mut self, max: usize) -> Self {
        self.max_message_size = max;
        self
    }

    pub fn with_reject_trailing(mut self, reject: bool) -> Self {
        self.reject_trailing = reject;
        self
    }

    /// Check a buffer length against `max_message_size`.
    pub fn check_size(&self, len: usize) -> Result<()> {
        if len > self.max_message_size {
            return Err(DecodeError::MessageTooLarge {
                size: len,
                max: self.max_message_size,
            });
        }
        Ok(())
    }
}
