//! Whole-file convenience helpers.
//!
//! The core is agnostic to where bytes come from; these helpers cover the
//! common case of slurping a small binary file into an owned buffer and
//! writing one back. Streaming I/O composes through the cursors'
//! `std::io` implementations instead.

use crate::ByteBuffer;
use std::{fs, io, path::Path};

impl ByteBuffer {
    /// Reads an entire file into a newly allocated buffer.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::from(fs::read(path)?))
    }

    /// Writes the buffer's full contents to a file, replacing it.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.as_slice())
    }
}
