//! Byte-order-aware binary codecs over bounds-checked cursors.
//!
//! # Overview
//!
//! The encode/decode framework on top of [`wireline_buffer`]: a family of
//! zero-sized codec tag types, one per wire representation, dispatched at
//! compile time. Byte order is part of the codec's type
//! (`U32<BigEndian>` and `U32<LittleEndian>` are distinct codecs sharing the
//! same 4-byte layout), so there is no runtime branching per scalar access.
//!
//! Supported shapes:
//! - Integers: [`U8`]–[`U64`], [`I8`]–[`I64`]
//! - Floats (bit-pattern reinterpretation): [`F16`], [`F32`], [`F64`]
//! - Fixed byte tuples: [`Tuple2`]–[`Tuple16`]
//! - Format signatures: [`Magic2`], [`Magic4`]
//! - Text: [`Ascii`], [`Utf8`], [`Cp1252`]
//! - Sequences and maps: [`Seq`], [`ByteSeq`], [`KeyValue`]
//! - Trailing payloads: [`ByteBuffer`]
//!
//! Every codec moves through a cursor, which enforces bounds before each
//! primitive access; failures surface as typed [`Error`]s, never as
//! truncation. Counts and byte lengths are always caller-supplied; nothing
//! here defines a self-describing wire format.
//!
//! # Example (decoding)
//!
//! ```
//! use wireline_codec::{BigEndian, ByteReader, ByteSeq, Magic2, ReaderExt, U32};
//!
//! // A tiny frame: 2-byte tag, big-endian length, payload.
//! let bytes = [0x42, 0x4D, 0x00, 0x00, 0x00, 0x03, 0xAA, 0xBB, 0xCC];
//! let mut reader = ByteReader::new(&bytes);
//!
//! reader.expect_as::<Magic2>(&Magic2::ascii("BM"))?;
//! let length = reader.read_as::<U32<BigEndian>>()? as usize;
//! let payload = reader.read_n::<ByteSeq>(length)?;
//! assert_eq!(payload, vec![0xAA, 0xBB, 0xCC]);
//! reader.finish()?;
//! # Ok::<(), wireline_codec::Error>(())
//! ```
//!
//! # Example (encoding)
//!
//! ```
//! use wireline_codec::{ByteBuffer, LittleEndian, Magic2, Utf8, WriterExt, U16};
//!
//! let mut buffer = ByteBuffer::new(8);
//! let mut writer = buffer.writer();
//! writer.write_as::<Magic2>(&Magic2::ascii("BM"))?;
//! writer.write_as::<U16<LittleEndian>>(&2026)?;
//! writer.write_as::<Utf8>(&"data".to_string())?;
//! assert_eq!(buffer.as_slice(), &[0x42, 0x4D, 0xEA, 0x07, b'd', b'a', b't', b'a']);
//! # Ok::<(), wireline_codec::Error>(())
//! ```

pub mod codec;
pub mod types;

// Re-export main types and traits.
pub use codec::{
    decode_exact, encode_to_buffer, Decoder, Encoder, ReaderExt, SeqDecoder, WriterExt,
};
pub use types::{
    collections::{ByteSeq, KeyValue, Seq},
    magic::{Magic2, Magic4},
    scalars::{F16, F32, F64, I16, I32, I64, I8, U16, U32, U64, U8},
    text::{Ascii, Cp1252, Utf8},
    tuple::{Tuple16, Tuple2, Tuple3, Tuple4, Tuple8},
};

// Re-export the substrate so downstream format crates need one dependency.
pub use wireline_buffer::{
    align, BigEndian, ByteBuffer, ByteOrder, ByteReader, ByteWriter, Error, LittleEndian,
    SizeWriter, SpanWriter,
};

// The half-precision float type decoded by `F16`.
pub use half::f16;
