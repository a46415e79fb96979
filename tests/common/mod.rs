// Reference encoder used as a test fixture. The crate itself is decode-only.

#![allow(dead_code)]

/// Append the varint form of `v` (64-bit ladder).
pub fn put_u64(out: &mut Vec<u8>, v: u64) {
    if v <= 240 {
        out.push(v as u8);
    } else if v <= 2287 {
        let x = v - 240;
        out.push((241 + x / 256) as u8);
        out.push((x % 256) as u8);
    } else if v <= 67823 {
        let x = v - 2288;
        out.push(249);
        out.push((x >> 8) as u8);
        out.push(x as u8);
    } else {
        let n = (64 - v.leading_zeros()).div_ceil(8).max(3) as usize;
        out.push(247 + n as u8);
        out.extend_from_slice(&v.to_le_bytes()[..n]);
    }
}

/// 32-bit values never need more than the 5-byte form.
pub fn put_u32(out: &mut Vec<u8>, v: u32) {
    put_u64(out, u64::from(v));
}

/// 16-bit values always fit the 1..=3 byte forms.
pub fn put_u16(out: &mut Vec<u8>, v: u16) {
    put_u64(out, u64::from(v));
}

pub fn put_i16(out: &mut Vec<u8>, v: i16) {
    put_u16(out, ((v << 1) ^ (v >> 15)) as u16);
}

pub fn put_i32(out: &mut Vec<u8>, v: i32) {
    put_u32(out, ((v << 1) ^ (v >> 31)) as u32);
}

pub fn put_i64(out: &mut Vec<u8>, v: i64) {
    put_u64(out, ((v << 1) ^ (v >> 63)) as u64);
}

pub fn put_f32(out: &mut Vec<u8>, v: f32) {
    put_u32(out, v.to_bits());
}

pub fn put_f64(out: &mut Vec<u8>, v: f64) {
    put_u64(out, v.to_bits());
}

pub fn put_string(out: &mut Vec<u8>, s: &str) {
    let len = u16::try_from(s.len()).expect("string too long for a u16 prefix");
    put_u16(out, len);
    out.extend_from_slice(s.as_bytes());
}

/// `None` is written as a zero length.
pub fn put_length_prefixed(out: &mut Vec<u8>, bytes: Option<&[u8]>) {
    match bytes {
        None => put_u16(out, 0),
        Some(b) => {
            let len = u16::try_from(b.len()).expect("blob too long for a u16 prefix");
            assert!(len > 0, "present blobs must be non-empty on the wire");
            put_u16(out, len);
            out.extend_from_slice(b);
        }
    }
}
