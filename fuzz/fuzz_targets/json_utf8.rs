#![no_main]

use libfuzzer_sys::fuzz_target;

use utf8_sink::Utf8Sink;

fuzz_target!(|data: &[u8]| {
    let mut out: Vec<u8> = Vec::new();
    out.escape_json_utf8(data).unwrap();

    // Minimal decoder for the escapes this crate emits. Unescaping must
    // recover the input byte for byte; everything else passed through
    // verbatim, including 0x00 and non-ASCII bytes.
    let mut decoded = Vec::with_capacity(data.len());
    let mut i = 0usize;
    while i < out.len() {
        let b = out[i];
        if b != b'\\' {
            decoded.push(b);
            i += 1;
            continue;
        }
        match out[i + 1] {
            b'"' => decoded.push(b'"'),
            b'\\' => decoded.push(b'\\'),
            b'b' => decoded.push(0x08),
            b'f' => decoded.push(0x0C),
            b'n' => decoded.push(b'\n'),
            b'r' => decoded.push(b'\r'),
            b't' => decoded.push(b'\t'),
            b'u' => {
                let hex = core::str::from_utf8(&out[i + 2..i + 6]).unwrap();
                decoded.push(u16::from_str_radix(hex, 16).unwrap() as u8);
                i += 6;
                continue;
            }
            other => panic!("unexpected escape byte {other:#x}"),
        }
        i += 2;
    }

    assert_eq!(decoded, data);
});
