//! Owned byte buffers, borrowed views, and bounds-checked cursors.
//!
//! # Overview
//!
//! The memory substrate for reading and writing binary data:
//! - [`ByteBuffer`]: an owned, heap-allocated contiguous byte region with
//!   offset-addressed, byte-order-aware random access.
//! - Views: plain `&[u8]` / `&mut [u8]` slices: non-owning, bounds-known,
//!   zero-copy to sub-slice, with lifetimes checked by the compiler.
//! - [`ByteReader`] and the [`ByteWriter`] implementations
//!   ([`SpanWriter`], [`SizeWriter`]): forward-only cursors that enforce
//!   bounds on every move and surface [`Error::NotEnoughBytes`] /
//!   [`Error::TooManyBytes`] instead of truncating.
//! - [`ByteOrder`] tags ([`BigEndian`], [`LittleEndian`]): type-level
//!   selection of how multi-byte scalars map to wire bytes, resolved at
//!   compile time.
//!
//! Everything is synchronous and allocation happens only in [`ByteBuffer`];
//! no operation logs, retries, or blocks. Nothing here is internally
//! synchronized; callers needing concurrent access must serialize or
//! partition it externally.
//!
//! # Example
//!
//! ```
//! use wireline_buffer::{BigEndian, ByteBuffer, ByteOrder, ByteWriter};
//!
//! // Produce a tiny frame: a 2-byte tag followed by a big-endian length.
//! let mut buffer = ByteBuffer::new(6);
//! let mut writer = buffer.writer();
//! writer.write(b"BM")?;
//! writer.write(&BigEndian::encode_u32(1024))?;
//!
//! // Consume it again.
//! let mut reader = buffer.reader();
//! assert_eq!(reader.read(2)?, b"BM");
//! assert_eq!(BigEndian::decode_u32(reader.read_array()?), 1024);
//! assert_eq!(reader.remaining(), 0);
//! # Ok::<(), wireline_buffer::Error>(())
//! ```

pub mod align;
pub mod buffer;
pub mod error;
mod fs;
pub mod order;
pub mod reader;
pub mod writer;

pub use buffer::ByteBuffer;
pub use error::Error;
pub use order::{BigEndian, ByteOrder, LittleEndian};
pub use reader::ByteReader;
pub use writer::{ByteWriter, SizeWriter, SpanWriter};
