//! The forward-only read cursor.

use crate::{align, Error};
use std::io;

/// A cursor that walks forward through a borrowed byte slice.
///
/// Every read is bounds-checked: asking for more than [`remaining`] bytes
/// fails with [`Error::NotEnoughBytes`] and leaves the cursor untouched.
/// Successful reads hand back sub-slices of the original input (no copy)
/// that never overlap previously returned slices, and the cursor never
/// rewinds. Cloning is cheap and is the basis for peeking.
///
/// [`remaining`]: ByteReader::remaining
///
/// # Example
///
/// ```
/// use wireline_buffer::ByteReader;
///
/// let mut reader = ByteReader::new(&[0xDE, 0xAD, 0xBE, 0xEF]);
/// assert_eq!(reader.read(2).unwrap(), &[0xDE, 0xAD]);
/// assert_eq!(reader.read_count(), 2);
/// assert_eq!(reader.remaining(), 2);
/// assert!(reader.read(3).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    span: &'a [u8],
    read_count: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a reader positioned at the start of `span`.
    pub fn new(span: &'a [u8]) -> Self {
        Self {
            span,
            read_count: 0,
        }
    }

    /// Total bytes consumed since creation.
    #[inline]
    pub fn read_count(&self) -> usize {
        self.read_count
    }

    /// Bytes left before exhaustion.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.span.len()
    }

    /// Whether the input is fully consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Fails with [`Error::NotEnoughBytes`] unless `count` bytes remain.
    #[inline]
    pub fn ensure(&self, count: usize) -> Result<(), Error> {
        if count > self.span.len() {
            return Err(Error::NotEnoughBytes);
        }
        Ok(())
    }

    /// Returns the next `count` bytes and advances the cursor.
    ///
    /// The returned slice borrows from the original input, so it stays valid
    /// after further reads and is disjoint from every other slice this
    /// reader has returned.
    #[inline]
    pub fn read(&mut self, count: usize) -> Result<&'a [u8], Error> {
        self.ensure(count)?;
        let (bytes, rest) = self.span.split_at(count);
        self.span = rest;
        self.read_count += count;
        Ok(bytes)
    }

    /// Reads a single byte, the primitive beneath every multi-byte codec.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, Error> {
        Ok(self.read(1)?[0])
    }

    /// Reads exactly `N` bytes into a fixed array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let bytes = self.read(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        Ok(array)
    }

    /// Skips forward to the next multiple of `alignment` (a power of two in
    /// `1..=256`), counting from the start of the input. A no-op when
    /// already aligned.
    pub fn align_to(&mut self, alignment: usize) -> Result<(), Error> {
        let pad = align::padding(self.read_count, alignment);
        self.read(pad).map(|_| ())
    }

    /// Consumes the reader, failing with [`Error::LeftOverBytes`] if any
    /// input remains.
    pub fn finish(self) -> Result<(), Error> {
        if !self.span.is_empty() {
            return Err(Error::LeftOverBytes(self.span.len()));
        }
        Ok(())
    }
}

impl<'a> From<&'a [u8]> for ByteReader<'a> {
    fn from(span: &'a [u8]) -> Self {
        Self::new(span)
    }
}

impl io::Read for ByteReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let count = buf.len().min(self.span.len());
        let (bytes, rest) = self.span.split_at(count);
        buf[..count].copy_from_slice(bytes);
        self.span = rest;
        self.read_count += count;
        Ok(count)
    }
}
