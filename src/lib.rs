#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

#[cfg(feature = "sonic-writeext")]
use std::io;

#[cfg(feature = "sonic-writeext")]
use sonic_rs::writer::WriteExt;

mod encode;
mod sink;
mod sinks;

pub use encode::{encode_unit, encode_unit_le};
pub use sink::Utf8Sink;
pub use sinks::{BufSink, WriterSink};

/// Maximum number of bytes required to JSON-escape `num_units` UTF-16 code
/// units.
///
/// The worst case is 6 bytes per unit (the `\u00XX` form); a surrogate pair
/// needs only 4 bytes for its 2 units. `need_quote` adds 2 for the
/// surrounding quotes.
#[inline]
pub fn max_escaped_len(num_units: usize, need_quote: bool) -> usize {
    num_units
        .saturating_mul(6)
        .saturating_add(if need_quote { 2 } else { 0 })
}

/// JSON-escape UTF-16 code units directly into a `sonic-rs` `WriteExt`
/// buffer.
///
/// Enabled only with the `sonic-writeext` feature.
#[cfg(feature = "sonic-writeext")]
pub fn write_json_utf16<W: WriteExt>(
    writer: &mut W,
    utf16: &[u16],
    need_quote: bool,
) -> io::Result<()> {
    let max_len = max_escaped_len(utf16.len(), need_quote);
    if max_len == 0 {
        return Ok(());
    }
    let buf = writer.reserve_with(max_len)?;
    let mut sink = BufSink::new(buf);
    if need_quote {
        sink.put_quote()?;
    }
    sink.escape_json_utf16(utf16)?;
    if need_quote {
        sink.put_quote()?;
    }
    let len = sink.written();
    // SAFETY: `BufSink` initialized the first `len` bytes of `buf`.
    unsafe {
        writer.flush_len(len)?;
    }
    Ok(())
}

/// JSON-escape little-endian UTF-16 byte pairs directly into a `sonic-rs`
/// `WriteExt` buffer.
///
/// Enabled only with the `sonic-writeext` feature.
#[cfg(feature = "sonic-writeext")]
pub fn write_json_utf16le<W: WriteExt>(
    writer: &mut W,
    utf16le: &[u8],
    need_quote: bool,
) -> io::Result<()> {
    let max_len = max_escaped_len(utf16le.len() / 2, need_quote);
    if max_len == 0 {
        return Ok(());
    }
    let buf = writer.reserve_with(max_len)?;
    let mut sink = BufSink::new(buf);
    if need_quote {
        sink.put_quote()?;
    }
    sink.escape_json_utf16le(utf16le)?;
    if need_quote {
        sink.put_quote()?;
    }
    let len = sink.written();
    // SAFETY: `BufSink` initialized the first `len` bytes of `buf`.
    unsafe {
        writer.flush_len(len)?;
    }
    Ok(())
}

/// JSON-escape an already-UTF-8-encoded byte sequence directly into a
/// `sonic-rs` `WriteExt` buffer.
///
/// Enabled only with the `sonic-writeext` feature.
#[cfg(feature = "sonic-writeext")]
pub fn write_json_utf8<W: WriteExt>(
    writer: &mut W,
    bytes: &[u8],
    need_quote: bool,
) -> io::Result<()> {
    let max_len = max_escaped_len(bytes.len(), need_quote);
    if max_len == 0 {
        return Ok(());
    }
    let buf = writer.reserve_with(max_len)?;
    let mut sink = BufSink::new(buf);
    if need_quote {
        sink.put_quote()?;
    }
    sink.escape_json_utf8(bytes)?;
    if need_quote {
        sink.put_quote()?;
    }
    let len = sink.written();
    // SAFETY: `BufSink` initialized the first `len` bytes of `buf`.
    unsafe {
        writer.flush_len(len)?;
    }
    Ok(())
}
