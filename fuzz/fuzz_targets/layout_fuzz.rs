#![no_main]
use libfuzzer_sys::fuzz_target;
use wirecursor::wire::{Cursor, FieldKind, layout};

const KINDS: [FieldKind; 14] = [
    FieldKind::Byte,
    FieldKind::I8,
    FieldKind::Bool,
    FieldKind::Char,
    FieldKind::U16,
    FieldKind::U32,
    FieldKind::U64,
    FieldKind::I16,
    FieldKind::I32,
    FieldKind::I64,
    FieldKind::F32,
    FieldKind::F64,
    FieldKind::String,
    FieldKind::Bytes,
];

fuzz_target!(|data: &[u8]| {
    // First byte picks the layout length; following bytes pick kinds.
    let Some((&n, rest)) = data.split_first() else {
        return;
    };
    let n = usize::from(n % 16).min(rest.len());
    let (picks, payload) = rest.split_at(n);
    let kinds: Vec<FieldKind> = picks
        .iter()
        .map(|&p| KINDS[usize::from(p) % KINDS.len()])
        .collect();
    let mut c = Cursor::new(payload);
    let _ = layout::decode_layout(&mut c, &kinds);
    assert!(c.position() <= c.size());
});
