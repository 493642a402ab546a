#![no_main]

use libfuzzer_sys::fuzz_target;

use utf8_sink::Utf8Sink;

const MAX_UNITS: usize = 4096;

fuzz_target!(|data: &[u8]| {
    let max_units = (data.len() / 2).min(MAX_UNITS);
    let bytes = &data[..max_units * 2];
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    // The LE byte-pair walk must agree with the u16 walk exactly.
    let mut from_le: Vec<u8> = Vec::new();
    from_le.escape_json_utf16le(bytes).unwrap();

    let mut from_units: Vec<u8> = Vec::new();
    from_units.escape_json_utf16(&units).unwrap();

    assert_eq!(from_le, from_units);

    let mut raw_le: Vec<u8> = Vec::new();
    raw_le.put_utf16le(bytes).unwrap();

    let mut raw_units: Vec<u8> = Vec::new();
    raw_units.put_utf16(&units).unwrap();

    assert_eq!(raw_le, raw_units);
});
