//! The [`Utf8Sink`] trait: UTF-16 transcoding and JSON string escaping
//! layered over a single byte-append primitive.

use std::io;

use crate::encode::{self, HEX};

/// An append-only destination for UTF-8 output.
///
/// Implementors provide [`put_byte`](Utf8Sink::put_byte); every other
/// operation has a default body built on it. Methods return
/// `io::Result<&mut Self>` so calls chain fluently while destination
/// failures propagate unchanged:
///
/// ```
/// use utf8_sink::Utf8Sink;
///
/// let mut out: Vec<u8> = Vec::new();
/// out.put_quote()?.escape_json_str("tab\there")?.put_quote()?;
/// assert_eq!(out, br#""tab\there""#);
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait Utf8Sink {
    /// Appends one raw byte to the destination.
    ///
    /// This is the only required method; the destination decides storage,
    /// growth and flushing.
    fn put_byte(&mut self, b: u8) -> io::Result<()>;

    /// Appends raw bytes verbatim.
    ///
    /// Destinations with a bulk append should override this.
    fn put_slice(&mut self, bytes: &[u8]) -> io::Result<&mut Self> {
        for &b in bytes {
            self.put_byte(b)?;
        }
        Ok(self)
    }

    /// Appends a string's bytes verbatim (a `&str` is already UTF-8).
    fn put_str(&mut self, s: &str) -> io::Result<&mut Self> {
        self.put_slice(s.as_bytes())
    }

    /// Like [`put_str`](Utf8Sink::put_str); `None` appends nothing.
    fn put_opt_str(&mut self, s: Option<&str>) -> io::Result<&mut Self> {
        match s {
            Some(s) => self.put_str(s),
            None => Ok(self),
        }
    }

    /// Appends the UTF-8 encoding of a single character (1-4 bytes).
    fn put_char(&mut self, c: char) -> io::Result<&mut Self> {
        let mut buf = [0u8; 4];
        self.put_slice(c.encode_utf8(&mut buf).as_bytes())
    }

    /// Transcodes a single UTF-16 code unit.
    ///
    /// A surrogate, which can never complete a pair here, is replaced with
    /// `'?'`. Use [`put_utf16`](Utf8Sink::put_utf16) for sequences where
    /// pairs should combine.
    fn put_unit(&mut self, code_unit: u16) -> io::Result<&mut Self> {
        if code_unit < 0x80 {
            self.put_byte(code_unit as u8)?;
        } else if code_unit < 0x800 {
            encode::put_utf8_2(self, code_unit)?;
        } else if encode::is_surrogate(code_unit) {
            self.put_byte(b'?')?;
        } else {
            encode::put_utf8_3(self, code_unit)?;
        }
        Ok(self)
    }

    /// Transcodes UTF-16 code units to UTF-8.
    fn put_utf16(&mut self, units: &[u16]) -> io::Result<&mut Self> {
        self.put_utf16_range(units, 0, units.len())
    }

    /// Transcodes the half-open range `[lo, hi)` of `units` to UTF-8.
    ///
    /// Surrogate lookahead never reads past `hi`. Panics if the range is
    /// out of bounds, like slice indexing.
    fn put_utf16_range(&mut self, units: &[u16], lo: usize, hi: usize) -> io::Result<&mut Self> {
        let units = &units[lo..hi];
        let mut idx = 0;
        while idx < units.len() {
            let code_unit = units[idx];
            if code_unit < 0x80 {
                self.put_byte(code_unit as u8)?;
                idx += 1;
            } else {
                idx = encode::encode_unit(self, units, idx)?;
            }
        }
        Ok(self)
    }

    /// Transcodes little-endian UTF-16 byte pairs to UTF-8.
    ///
    /// A dangling trailing byte is ignored.
    fn put_utf16le(&mut self, utf16le: &[u8]) -> io::Result<&mut Self> {
        let max_units = utf16le.len() / 2;
        let mut idx = 0;
        while idx < max_units {
            let code_unit = encode::read_unit_le(utf16le, idx);
            if code_unit < 0x80 {
                self.put_byte(code_unit as u8)?;
                idx += 1;
            } else {
                idx = encode::encode_unit_le(self, utf16le, max_units, idx)?;
            }
        }
        Ok(self)
    }

    /// Appends a JSON-escaped UTF-8 rendition of UTF-16 code units.
    ///
    /// No surrounding quotes are written; quoting is a separate operation
    /// ([`put_quote`](Utf8Sink::put_quote)).
    fn escape_json_utf16(&mut self, units: &[u16]) -> io::Result<&mut Self> {
        self.escape_json_utf16_range(units, 0, units.len())
    }

    /// [`escape_json_utf16`](Utf8Sink::escape_json_utf16) over the
    /// half-open range `[lo, hi)`.
    ///
    /// Surrogate lookahead never reads past `hi`. Panics if the range is
    /// out of bounds.
    fn escape_json_utf16_range(
        &mut self,
        units: &[u16],
        lo: usize,
        hi: usize,
    ) -> io::Result<&mut Self> {
        let units = &units[lo..hi];
        let mut idx = 0;
        while idx < units.len() {
            let code_unit = units[idx];
            if code_unit < 0x20 {
                self.escape_json_ctrl(code_unit as u8)?;
                idx += 1;
            } else if code_unit < 0x80 {
                let b = code_unit as u8;
                if b == b'"' || b == b'\\' {
                    self.put_byte(b'\\')?;
                }
                self.put_byte(b)?;
                idx += 1;
            } else {
                idx = encode::encode_unit(self, units, idx)?;
            }
        }
        Ok(self)
    }

    /// [`escape_json_utf16`](Utf8Sink::escape_json_utf16) over
    /// little-endian UTF-16 byte pairs. A dangling trailing byte is
    /// ignored.
    fn escape_json_utf16le(&mut self, utf16le: &[u8]) -> io::Result<&mut Self> {
        let max_units = utf16le.len() / 2;
        let mut idx = 0;
        while idx < max_units {
            let code_unit = encode::read_unit_le(utf16le, idx);
            if code_unit < 0x20 {
                self.escape_json_ctrl(code_unit as u8)?;
                idx += 1;
            } else if code_unit < 0x80 {
                let b = code_unit as u8;
                if b == b'"' || b == b'\\' {
                    self.put_byte(b'\\')?;
                }
                self.put_byte(b)?;
                idx += 1;
            } else {
                idx = encode::encode_unit_le(self, utf16le, max_units, idx)?;
            }
        }
        Ok(self)
    }

    /// Appends a JSON-escaped copy of an already-UTF-8-encoded byte
    /// sequence.
    ///
    /// Input bytes are never re-encoded: byte 0x00 and everything at or
    /// above 0x80 (the lead and continuation bytes of multi-byte UTF-8
    /// sequences) pass through verbatim. Only bytes in `0x01..0x20` and
    /// the two JSON-special ASCII characters are escaped.
    fn escape_json_utf8(&mut self, bytes: &[u8]) -> io::Result<&mut Self> {
        let mut run_start = 0usize;
        for (i, &b) in bytes.iter().enumerate() {
            let needs_escape = (b != 0 && b < 0x20) || b == b'"' || b == b'\\';
            if !needs_escape {
                continue;
            }
            if run_start < i {
                self.put_slice(&bytes[run_start..i])?;
            }
            if b < 0x20 {
                self.escape_json_ctrl(b)?;
            } else {
                self.put_byte(b'\\')?;
                self.put_byte(b)?;
            }
            run_start = i + 1;
        }
        if run_start < bytes.len() {
            self.put_slice(&bytes[run_start..])?;
        }
        Ok(self)
    }

    /// Appends a JSON-escaped copy of a string.
    fn escape_json_str(&mut self, s: &str) -> io::Result<&mut Self> {
        self.escape_json_utf8(s.as_bytes())
    }

    /// Appends the JSON escape sequence for a control character.
    ///
    /// The named two-character forms cover `\b`, `\f`, `\n`, `\r` and
    /// `\t`; every other value gets the generic `\u00XX` form.
    fn escape_json_ctrl(&mut self, c: u8) -> io::Result<&mut Self> {
        match c {
            0x08 => self.put_slice(br#"\b"#),
            0x0C => self.put_slice(br#"\f"#),
            b'\n' => self.put_slice(br#"\n"#),
            b'\r' => self.put_slice(br#"\r"#),
            b'\t' => self.put_slice(br#"\t"#),
            _ => self.put_slice(&[
                b'\\',
                b'u',
                b'0',
                b'0',
                HEX[usize::from(c >> 4)],
                HEX[usize::from(c & 0x0F)],
            ]),
        }
    }

    /// Appends a `"` byte.
    fn put_quote(&mut self) -> io::Result<&mut Self> {
        self.put_byte(b'"')?;
        Ok(self)
    }

    /// Appends `s` wrapped in quotes, without escaping the content.
    fn put_quoted(&mut self, s: &str) -> io::Result<&mut Self> {
        self.put_byte(b'"')?;
        self.put_str(s)?;
        self.put_byte(b'"')?;
        Ok(self)
    }
}

impl<S: Utf8Sink + ?Sized> Utf8Sink for &mut S {
    #[inline]
    fn put_byte(&mut self, b: u8) -> io::Result<()> {
        (**self).put_byte(b)
    }

    #[inline]
    fn put_slice(&mut self, bytes: &[u8]) -> io::Result<&mut Self> {
        (**self).put_slice(bytes)?;
        Ok(self)
    }
}
