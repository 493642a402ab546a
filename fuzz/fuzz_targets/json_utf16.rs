#![no_main]

use libfuzzer_sys::fuzz_target;

use utf8_sink::Utf8Sink;

const MAX_UNITS: usize = 4096;

fuzz_target!(|data: &[u8]| {
    let max_units = (data.len() / 2).min(MAX_UNITS);
    let mut units = Vec::with_capacity(max_units);
    for i in 0..max_units {
        units.push(u16::from_le_bytes([data[i * 2], data[i * 2 + 1]]));
    }

    let mut out: Vec<u8> = Vec::new();
    out.put_quote().unwrap();
    out.escape_json_utf16(&units).unwrap();
    out.put_quote().unwrap();

    // The escaped form must be valid UTF-8 and parse back to the input with
    // unpaired surrogates replaced by '?'.
    let text = core::str::from_utf8(&out).unwrap();
    let decoded: String = serde_json::from_str(text).unwrap();

    let expected: String = char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or('?'))
        .collect();
    assert_eq!(decoded, expected);
});
