//! Sink implementations for common byte destinations.

use core::mem::MaybeUninit;
use std::io::{self, Write};

use crate::sink::Utf8Sink;

impl Utf8Sink for Vec<u8> {
    #[inline]
    fn put_byte(&mut self, b: u8) -> io::Result<()> {
        self.push(b);
        Ok(())
    }

    #[inline]
    fn put_slice(&mut self, bytes: &[u8]) -> io::Result<&mut Self> {
        self.extend_from_slice(bytes);
        Ok(self)
    }
}

/// Adapts any [`io::Write`] into a [`Utf8Sink`].
///
/// There is no internal buffering, so wrap files and sockets in a
/// `BufWriter`. Writer errors surface unchanged from every sink method.
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> core::fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WriterSink").finish_non_exhaustive()
    }
}

impl<W: Write> WriterSink<W> {
    /// Creates a sink writing to `inner`.
    pub fn new(inner: W) -> Self {
        WriterSink { inner }
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Utf8Sink for WriterSink<W> {
    #[inline]
    fn put_byte(&mut self, b: u8) -> io::Result<()> {
        self.inner.write_all(&[b])
    }

    #[inline]
    fn put_slice(&mut self, bytes: &[u8]) -> io::Result<&mut Self> {
        self.inner.write_all(bytes)?;
        Ok(self)
    }
}

/// A sink writing into a fixed, caller-provided buffer.
///
/// The buffer may start uninitialized; [`put_byte`](Utf8Sink::put_byte)
/// initializes it front to back and fails with [`io::ErrorKind::WriteZero`]
/// once full. Size the buffer with [`max_escaped_len`](crate::max_escaped_len)
/// to make overflow impossible for a single escape call.
pub struct BufSink<'a> {
    buf: &'a mut [MaybeUninit<u8>],
    len: usize,
}

impl<'a> BufSink<'a> {
    /// Creates a sink over `buf`, starting at offset 0.
    pub fn new(buf: &'a mut [MaybeUninit<u8>]) -> Self {
        BufSink { buf, len: 0 }
    }

    /// Number of bytes written so far.
    pub fn written(&self) -> usize {
        self.len
    }

    /// The initialized prefix of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `put_byte` has initialized the first `len` bytes.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr() as *const u8, self.len) }
    }
}

impl Utf8Sink for BufSink<'_> {
    #[inline]
    fn put_byte(&mut self, b: u8) -> io::Result<()> {
        if self.len == self.buf.len() {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink buffer full"));
        }
        self.buf[self.len] = MaybeUninit::new(b);
        self.len += 1;
        Ok(())
    }
}
