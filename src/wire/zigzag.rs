// Zigzag sign recovery.
//
// Even values map to non-negative integers, odd values to negative ones:
// 0 -> 0, 1 -> -1, 2 -> 1, 3 -> -2, ...
//
// Computed as `(u >> 1) ^ -(u & 1)`, which equals `-((u >> 1) + 1)` for odd
// `u` and `u >> 1` for even `u` without ever overflowing.

/// Decode a zigzag-encoded 16-bit value.
#[inline]
pub fn decode_u16(u: u16) -> i16 {
    ((u >> 1) as i16) ^ (-((u & 1) as i16))
}

/// Decode a zigzag-encoded 32-bit value.
#[inline]
pub fn decode_u32(u: u32) -> i32 {
    ((u >> 1) as i32) ^ (-((u & 1) as i32))
}

/// Decode a zigzag-encoded 64-bit value.
#[inline]
pub fn decode_u64(u: u64) -> i64 {
    ((u >> 1) as i64) ^ (-((u & 1) as i64))
}
