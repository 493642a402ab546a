use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use utf8_sink::Utf8Sink;

struct Case {
    name: &'static str,
    units: Vec<u16>,
    utf16le: Vec<u8>,
}

fn utf16le_from_str(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

fn units_from_utf16le(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect()
}

fn build_cases() -> Vec<Case> {
    let mut cases = Vec::new();

    let ascii = utf16le_from_str("Hello \"quoted\" World");
    cases.push(Case {
        name: "ascii",
        units: units_from_utf16le(&ascii),
        utf16le: ascii,
    });

    let long_ascii =
        utf16le_from_str("aaaaaaa\"bbbbbbb\\ccccccc\tddddddd\reeeeeee\nfffffff'ggggggg");
    cases.push(Case {
        name: "long_ascii",
        units: units_from_utf16le(&long_ascii),
        utf16le: long_ascii,
    });

    let mixed = utf16le_from_str("Hello \u{20ac} \u{e9} \u{1f600} World");
    cases.push(Case {
        name: "mixed",
        units: units_from_utf16le(&mixed),
        utf16le: mixed,
    });

    let emoji = utf16le_from_str(&"\u{1f600}".repeat(16));
    cases.push(Case {
        name: "emoji",
        units: units_from_utf16le(&emoji),
        utf16le: emoji,
    });

    let controls = utf16le_from_str(&"\u{1}\u{2}\u{3}\u{4}".repeat(8));
    cases.push(Case {
        name: "controls",
        units: units_from_utf16le(&controls),
        utf16le: controls,
    });

    let win_path = utf16le_from_str(r#"C:\Windows\System32\drivers\etc\hosts"#);
    cases.push(Case {
        name: "win_path",
        units: units_from_utf16le(&win_path),
        utf16le: win_path,
    });

    cases
}

fn bench_escape_json_utf16(c: &mut Criterion) {
    let cases = build_cases();
    let mut group = c.benchmark_group("escape_json_utf16");
    for case in &cases {
        group.throughput(Throughput::Bytes((case.units.len() * 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, case| {
            let mut out: Vec<u8> = Vec::with_capacity(case.units.len() * 6);
            b.iter(|| {
                out.clear();
                out.escape_json_utf16(black_box(&case.units)).unwrap();
                black_box(out.len());
            });
        });
    }
    group.finish();
}

fn bench_escape_json_utf16le(c: &mut Criterion) {
    let cases = build_cases();
    let mut group = c.benchmark_group("escape_json_utf16le");
    for case in &cases {
        group.throughput(Throughput::Bytes(case.utf16le.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, case| {
            let mut out: Vec<u8> = Vec::with_capacity(case.utf16le.len() * 3);
            b.iter(|| {
                out.clear();
                out.escape_json_utf16le(black_box(&case.utf16le)).unwrap();
                black_box(out.len());
            });
        });
    }
    group.finish();
}

fn bench_put_utf16(c: &mut Criterion) {
    let cases = build_cases();
    let mut group = c.benchmark_group("put_utf16");
    for case in &cases {
        group.throughput(Throughput::Bytes((case.units.len() * 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, case| {
            let mut out: Vec<u8> = Vec::with_capacity(case.units.len() * 3);
            b.iter(|| {
                out.clear();
                out.put_utf16(black_box(&case.units)).unwrap();
                black_box(out.len());
            });
        });
    }
    group.finish();
}

fn bench_escape_json_str(c: &mut Criterion) {
    let cases = build_cases();
    let mut group = c.benchmark_group("escape_json_str");
    for case in &cases {
        let s = String::from_utf16(&case.units).unwrap();
        group.throughput(Throughput::Bytes(s.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &s, |b, s| {
            let mut out: Vec<u8> = Vec::with_capacity(s.len() * 6);
            b.iter(|| {
                out.clear();
                out.escape_json_str(black_box(s)).unwrap();
                black_box(out.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_escape_json_utf16,
    bench_escape_json_utf16le,
    bench_put_utf16,
    bench_escape_json_str
);
criterion_main!(benches);
