mod common;

use proptest::prelude::*;
use wirecursor::wire::{Cursor, FieldKind, varint};

proptest! {
    #[test]
    fn prop_u64_roundtrip(v in any::<u64>()) {
        let mut buf = Vec::new();
        common::put_u64(&mut buf, v);
        prop_assert_eq!(buf.len(), varint::encoded_len_u64(buf[0]));
        let mut c = Cursor::new(&buf);
        prop_assert_eq!(c.read_u64().unwrap(), v);
        prop_assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn prop_u32_roundtrip(v in any::<u32>()) {
        let mut buf = Vec::new();
        common::put_u32(&mut buf, v);
        prop_assert_eq!(buf.len(), varint::encoded_len_u32(buf[0]));
        let mut c = Cursor::new(&buf);
        prop_assert_eq!(c.read_u32().unwrap(), v);
        prop_assert!(c.is_exhausted());
    }

    #[test]
    fn prop_u16_roundtrip(v in any::<u16>()) {
        let mut buf = Vec::new();
        common::put_u16(&mut buf, v);
        prop_assert_eq!(Some(buf.len()), varint::encoded_len_u16(buf[0]));
        prop_assert_eq!(Cursor::new(&buf).read_u16().unwrap(), v);
    }

    #[test]
    fn prop_zigzag_bijection(a in any::<i16>(), b in any::<i32>(), c in any::<i64>()) {
        let mut buf = Vec::new();
        common::put_i16(&mut buf, a);
        common::put_i32(&mut buf, b);
        common::put_i64(&mut buf, c);
        let mut cur = Cursor::new(&buf);
        prop_assert_eq!(cur.read_i16().unwrap(), a);
        prop_assert_eq!(cur.read_i32().unwrap(), b);
        prop_assert_eq!(cur.read_i64().unwrap(), c);
        prop_assert!(cur.is_exhausted());
    }

    #[test]
    fn prop_float_bits_roundtrip(f in any::<u32>(), d in any::<u64>()) {
        let (f, d) = (f32::from_bits(f), f64::from_bits(d));
        let mut buf = Vec::new();
        common::put_f32(&mut buf, f);
        common::put_f64(&mut buf, d);
        let mut cur = Cursor::new(&buf);
        prop_assert_eq!(cur.read_f32().unwrap().to_bits(), f.to_bits());
        prop_assert_eq!(cur.read_f64().unwrap().to_bits(), d.to_bits());
    }

    #[test]
    fn prop_string_roundtrip(s in "\\PC{0,64}") {
        let mut buf = Vec::new();
        common::put_string(&mut buf, &s);
        let mut cur = Cursor::new(&buf);
        prop_assert_eq!(cur.read_string().unwrap(), s);
        prop_assert!(cur.is_exhausted());
    }

    #[test]
    fn prop_truncation_is_out_of_range(v in 241u64.., cut in 1usize..9) {
        let mut buf = Vec::new();
        common::put_u64(&mut buf, v);
        let keep = buf.len().saturating_sub(cut);
        let err = Cursor::new(&buf[..keep]).read_u64().unwrap_err();
        prop_assert!(err.is_out_of_range());
    }

    #[test]
    fn prop_arbitrary_bytes_never_overread(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        kinds in proptest::collection::vec(0usize..14, 1..16)
    ) {
        const KINDS: [FieldKind; 14] = [
            FieldKind::Byte, FieldKind::Bool, FieldKind::Char, FieldKind::I8,
            FieldKind::U16, FieldKind::U32, FieldKind::U64,
            FieldKind::I16, FieldKind::I32, FieldKind::I64,
            FieldKind::F32, FieldKind::F64, FieldKind::String, FieldKind::Bytes,
        ];
        let mut cur = Cursor::new(&data);
        for k in kinds {
            let before = cur.position();
            let res = wirecursor::wire::layout::decode_field(&mut cur, KINDS[k]);
            prop_assert!(cur.position() <= cur.size());
            prop_assert!(cur.position() >= before);
            if res.is_err() {
                break;
            }
        }
    }
}
