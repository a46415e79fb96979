mod common;

use wirecursor::wire::{Cursor, DecodeError};

fn decode_u64(bytes: &[u8]) -> Result<u64, DecodeError> {
    Cursor::new(bytes).read_u64()
}

#[test]
fn boundary_exactness() {
    let cases: &[(&[u8], u64)] = &[
        (&[240], 240),
        (&[241, 0], 240),
        (&[241, 255], 495),
        (&[248, 255], 2287),
        (&[249, 0, 0], 2288),
        (&[249, 255, 255], 67823),
        (&[250, 0, 0, 1], 65536),
    ];
    for &(bytes, want) in cases {
        assert_eq!(decode_u64(bytes).unwrap(), want, "{bytes:?}");
        assert_eq!(
            u64::from(Cursor::new(bytes).read_u32().unwrap()),
            want,
            "{bytes:?}"
        );
    }
}

#[test]
fn encoder_boundaries_match_decoder() {
    let edges = [
        0u64,
        240,
        241,
        2287,
        2288,
        67823,
        67824,
        (1 << 24) - 1,
        1 << 24,
        u32::MAX as u64,
        1 << 32,
        (1 << 40) - 1,
        1 << 40,
        1 << 48,
        1 << 56,
        u64::MAX,
    ];
    let expected_len = [1usize, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 8, 9, 9];
    for (&v, &len) in edges.iter().zip(&expected_len) {
        let mut buf = Vec::new();
        common::put_u64(&mut buf, v);
        assert_eq!(buf.len(), len, "encoded length of {v}");
        let mut c = Cursor::new(&buf);
        assert_eq!(c.read_u64().unwrap(), v);
        assert_eq!(c.remaining(), 0);
    }
}

#[test]
fn zigzag_small_values() {
    let mut c = Cursor::new(&[0, 1, 2]);
    assert_eq!(c.read_i32().unwrap(), 0);
    assert_eq!(c.read_i32().unwrap(), -1);
    assert_eq!(c.read_i32().unwrap(), 1);
}

#[test]
fn truncated_three_byte_varint_is_out_of_range() {
    let buf = [249u8, 0];
    for result in [
        Cursor::new(&buf).read_u16().map(u64::from),
        Cursor::new(&buf).read_u32().map(u64::from),
        Cursor::new(&buf).read_u64(),
    ] {
        match result {
            Err(DecodeError::OutOfRange { size, .. }) => assert_eq!(size, 2),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn failed_read_never_passes_end() {
    let buf = [255u8, 1, 2, 3];
    let mut c = Cursor::new(&buf);
    assert!(c.read_u64().unwrap_err().is_out_of_range());
    assert!(c.position() <= c.size());
    assert_eq!(c.remaining(), 0);
}

#[test]
fn exact_fit_nine_byte_varint() {
    let buf = [255u8, 1, 2, 3, 4, 5, 6, 7, 8];
    let mut c = Cursor::new(&buf);
    assert_eq!(c.read_u64().unwrap(), 0x0807_0605_0403_0201);
    assert_eq!(c.remaining(), 0);
    assert_eq!(c.consumed(), 9);
}

#[test]
fn u32_and_u64_ladders_diverge_on_high_leads() {
    let buf = [252u8, 1, 0, 0, 0, 7];
    let mut narrow = Cursor::new(&buf);
    assert_eq!(narrow.read_u32().unwrap(), 1);
    assert_eq!(narrow.read_byte().unwrap(), 7);

    let mut wide = Cursor::new(&buf);
    assert_eq!(wide.read_u64().unwrap(), 1 + (7 << 32));
    assert!(wide.is_exhausted());
}

#[test]
fn sixteen_bit_ladder_rejects_wide_leads() {
    let mut c = Cursor::new(&[250, 0, 0, 0]);
    assert!(matches!(
        c.read_u16(),
        Err(DecodeError::MalformedVarint { lead: 250, width: 16 })
    ));
    let mut c = Cursor::new(&[255, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert!(matches!(
        c.read_i16(),
        Err(DecodeError::MalformedVarint { lead: 255, width: 16 })
    ));
}

#[test]
fn sixteen_bit_three_byte_form_wraps() {
    let mut c = Cursor::new(&[249, 247, 16, 249, 255, 255]);
    assert_eq!(c.read_u16().unwrap(), 0);
    assert_eq!(c.read_u16().unwrap(), 2287);
    assert!(c.is_exhausted());

    // A wrapped length prefix of 0 still reads as an absent field.
    let mut c = Cursor::new(&[249, 247, 16, 7]);
    assert_eq!(c.read_length_prefixed_bytes().unwrap(), None);
    assert_eq!(c.read_byte().unwrap(), 7);
}

#[test]
fn absent_bytes_vs_empty_string() {
    let buf = [0u8, 0];
    let mut c = Cursor::new(&buf);
    assert_eq!(c.read_length_prefixed_bytes().unwrap(), None);
    assert_eq!(c.read_string().unwrap(), String::new());
    assert!(c.is_exhausted());
}

#[test]
fn present_bytes_and_text() {
    let mut buf = Vec::new();
    common::put_length_prefixed(&mut buf, Some(b"\x00\x01"));
    common::put_string(&mut buf, "ünïcode");
    let mut c = Cursor::new(&buf);
    assert_eq!(c.read_length_prefixed_bytes().unwrap(), Some(vec![0, 1]));
    assert_eq!(c.read_string().unwrap(), "ünïcode");
}

#[test]
fn rewind_is_idempotent() {
    let mut buf = Vec::new();
    common::put_u32(&mut buf, 70_000);
    common::put_i64(&mut buf, -123_456_789_012);
    common::put_string(&mut buf, "again");
    common::put_f64(&mut buf, std::f64::consts::PI);
    common::put_length_prefixed(&mut buf, None);

    let mut c = Cursor::new(&buf);
    let read_all = |c: &mut Cursor<'_>| {
        (
            c.read_u32().unwrap(),
            c.read_i64().unwrap(),
            c.read_string().unwrap(),
            c.read_f64().unwrap(),
            c.read_length_prefixed_bytes().unwrap(),
        )
    };
    let first = read_all(&mut c);
    assert!(c.is_exhausted());
    c.rewind();
    let second = read_all(&mut c);
    assert_eq!(first, second);
    assert_eq!(first.0, 70_000);
    assert_eq!(first.1, -123_456_789_012);
    assert_eq!(first.3, std::f64::consts::PI);
}

#[test]
fn negative_byte_count_is_invalid_argument() {
    let mut c = Cursor::new(&[1, 2, 3]);
    assert!(matches!(
        c.read_bytes(-5),
        Err(DecodeError::InvalidArgument(_))
    ));
    assert_eq!(c.read_bytes(3).unwrap(), vec![1, 2, 3]);
}
