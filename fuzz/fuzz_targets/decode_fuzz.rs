#![no_main]
use libfuzzer_sys::fuzz_target;
use wirecursor::wire::Cursor;

fuzz_target!(|data: &[u8]| {
    // Every reader must return an error on bad input, never panic or
    // move past the end of the buffer.
    let mut c = Cursor::new(data);
    let _ = c.read_u16();
    let _ = c.read_u32();
    let _ = c.read_u64();
    let _ = c.read_i16();
    let _ = c.read_i32();
    let _ = c.read_i64();
    let _ = c.read_f32();
    let _ = c.read_f64();
    let _ = c.read_string();
    let _ = c.read_length_prefixed_bytes();
    if let Ok(n) = c.read_i32() {
        let _ = c.read_bytes(n);
    }
    assert!(c.position() <= c.size());

    c.rewind();
    while c.read_u64().is_ok() {}
    assert!(c.position() <= c.size());
});
