//! The forward-only write cursors.

use crate::{align, Error};
use std::io;
use std::mem;

const ZERO_PADDING: [u8; 256] = [0; 256];

/// A cursor that produces bytes front to back.
///
/// Mirrors [`ByteReader`](crate::ByteReader): writes beyond [`remaining`]
/// fail with [`Error::TooManyBytes`], written ranges are disjoint, and the
/// cursor never rewinds. Two implementations exist: [`SpanWriter`] stores
/// bytes into borrowed memory and [`SizeWriter`] only counts them.
///
/// [`remaining`]: ByteWriter::remaining
pub trait ByteWriter {
    /// Total bytes produced since creation.
    fn write_count(&self) -> usize;

    /// Capacity left before exhaustion.
    fn remaining(&self) -> usize;

    /// Appends `bytes`, failing with [`Error::TooManyBytes`] if they do not
    /// fit in the remaining capacity.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error>;

    /// Appends a single byte, the primitive beneath every multi-byte codec.
    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.write(&[byte])
    }

    /// Fails with [`Error::TooManyBytes`] unless `count` bytes of capacity
    /// remain.
    fn ensure(&self, count: usize) -> Result<(), Error> {
        if count > self.remaining() {
            return Err(Error::TooManyBytes);
        }
        Ok(())
    }

    /// Emits zero bytes up to the next multiple of `alignment` (a power of
    /// two in `1..=256`), counting from the start of the output. A no-op
    /// when already aligned.
    fn align_to(&mut self, alignment: usize) -> Result<(), Error> {
        let pad = align::padding(self.write_count(), alignment);
        self.write(&ZERO_PADDING[..pad])
    }
}

/// A [`ByteWriter`] that stores bytes into a borrowed mutable slice.
///
/// # Example
///
/// ```
/// use wireline_buffer::{ByteWriter, SpanWriter};
///
/// let mut bytes = [0u8; 4];
/// let mut writer = SpanWriter::new(&mut bytes);
/// writer.write(&[0xCA, 0xFE]).unwrap();
/// assert_eq!(writer.write_count(), 2);
/// assert_eq!(writer.remaining(), 2);
/// drop(writer);
/// assert_eq!(bytes, [0xCA, 0xFE, 0x00, 0x00]);
/// ```
#[derive(Debug)]
pub struct SpanWriter<'a> {
    span: &'a mut [u8],
    write_count: usize,
}

impl<'a> SpanWriter<'a> {
    /// Creates a writer positioned at the start of `span`.
    pub fn new(span: &'a mut [u8]) -> Self {
        Self {
            span,
            write_count: 0,
        }
    }
}

impl ByteWriter for SpanWriter<'_> {
    #[inline]
    fn write_count(&self) -> usize {
        self.write_count
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.span.len()
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let count = bytes.len();
        self.ensure(count)?;
        let span = mem::take(&mut self.span);
        let (head, rest) = span.split_at_mut(count);
        head.copy_from_slice(bytes);
        self.span = rest;
        self.write_count += count;
        Ok(())
    }
}

impl<'a> From<&'a mut [u8]> for SpanWriter<'a> {
    fn from(span: &'a mut [u8]) -> Self {
        Self::new(span)
    }
}

impl io::Write for SpanWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let count = buf.len().min(self.span.len());
        ByteWriter::write(self, &buf[..count]).map_err(|_| {
            io::Error::new(io::ErrorKind::WriteZero, "writer capacity exhausted")
        })?;
        Ok(count)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A [`ByteWriter`] that discards bytes and only counts them.
///
/// Used to measure an encoding before allocating for it.
#[derive(Debug, Default, Clone)]
pub struct SizeWriter {
    write_count: usize,
}

impl SizeWriter {
    /// Creates a writer with a zero count.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteWriter for SizeWriter {
    #[inline]
    fn write_count(&self) -> usize {
        self.write_count
    }

    #[inline]
    fn remaining(&self) -> usize {
        usize::MAX - self.write_count
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.write_count += bytes.len();
        Ok(())
    }
}
