//! Core codec traits and cursor entry points.

use crate::{ByteBuffer, ByteReader, ByteWriter, Error, SizeWriter};

/// A decode rule for one wire representation.
///
/// Implementors are zero-sized tag types (e.g. `U32<BigEndian>`), not the
/// decoded values themselves: a 4-byte big-endian unsigned integer and its
/// little-endian twin are distinct, statically-resolved codecs sharing the
/// same 4-byte layout. Selection happens at generic instantiation, never
/// by branching on a stored enum.
pub trait Decoder {
    /// The type a successful decode produces.
    type Value;

    /// Reads one value through the cursor, consuming exactly the bytes the
    /// wire representation occupies.
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self::Value, Error>;
}

/// The encode rule paired with a [`Decoder`].
///
/// Encoding through a [`SizeWriter`] measures the representation without
/// storing it; through a [`SpanWriter`](crate::SpanWriter) it produces
/// bytes. Implementations go through the cursor for every byte; none touch
/// backing memory directly.
pub trait Encoder {
    /// The type this codec encodes.
    type Value;

    /// Writes one value through the cursor.
    fn encode(value: &Self::Value, writer: &mut impl ByteWriter) -> Result<(), Error>;
}

/// A decode rule whose element count is supplied by the caller.
///
/// Collections and text blocks have no intrinsic length on the wire; the
/// surrounding format dictates it. The count is trusted: validate lengths
/// decoded from untrusted input before passing them here.
pub trait SeqDecoder {
    /// The type a successful decode produces.
    type Value;

    /// Reads `count` elements (or bytes, for text) through the cursor.
    fn decode_n(reader: &mut ByteReader<'_>, count: usize) -> Result<Self::Value, Error>;
}

/// Decode entry points on [`ByteReader`].
pub trait ReaderExt {
    /// Decodes one value: `reader.read_as::<U32<BigEndian>>()`.
    fn read_as<D: Decoder>(&mut self) -> Result<D::Value, Error>;

    /// Decodes a caller-counted sequence: `reader.read_n::<Seq<U8>>(count)`.
    fn read_n<D: SeqDecoder>(&mut self, count: usize) -> Result<D::Value, Error>;

    /// Decodes one value without advancing the cursor.
    fn peek_as<D: Decoder>(&self) -> Result<D::Value, Error>;

    /// Decodes a raw value and maps it into a restricted type, failing with
    /// [`Error::OutOfRange`] when `validate` rejects it. The building block
    /// for enumerated wire fields.
    fn read_validated<D: Decoder, T>(
        &mut self,
        validate: impl FnOnce(D::Value) -> Option<T>,
    ) -> Result<T, Error>;

    /// Decodes one value and compares it against `expected`, failing with
    /// [`Error::UnexpectedData`] on mismatch. Format layers use this for
    /// signature tags.
    fn expect_as<D: Decoder>(&mut self, expected: &D::Value) -> Result<(), Error>
    where
        D::Value: PartialEq;
}

impl ReaderExt for ByteReader<'_> {
    #[inline]
    fn read_as<D: Decoder>(&mut self) -> Result<D::Value, Error> {
        D::decode(self)
    }

    #[inline]
    fn read_n<D: SeqDecoder>(&mut self, count: usize) -> Result<D::Value, Error> {
        D::decode_n(self, count)
    }

    fn peek_as<D: Decoder>(&self) -> Result<D::Value, Error> {
        let mut probe = self.clone();
        D::decode(&mut probe)
    }

    fn read_validated<D: Decoder, T>(
        &mut self,
        validate: impl FnOnce(D::Value) -> Option<T>,
    ) -> Result<T, Error> {
        let raw = D::decode(self)?;
        validate(raw).ok_or(Error::OutOfRange)
    }

    fn expect_as<D: Decoder>(&mut self, expected: &D::Value) -> Result<(), Error>
    where
        D::Value: PartialEq,
    {
        let value = D::decode(self)?;
        if value != *expected {
            return Err(Error::UnexpectedData);
        }
        Ok(())
    }
}

/// Encode entry points on every [`ByteWriter`].
pub trait WriterExt: ByteWriter + Sized {
    /// Encodes one value: `writer.write_as::<U32<BigEndian>>(&len)`.
    #[inline]
    fn write_as<E: Encoder>(&mut self, value: &E::Value) -> Result<(), Error> {
        E::encode(value, self)
    }
}

impl<W: ByteWriter + Sized> WriterExt for W {}

/// Encodes a value into a freshly allocated [`ByteBuffer`] sized exactly to
/// fit, by measuring with a [`SizeWriter`] first.
pub fn encode_to_buffer<E: Encoder>(value: &E::Value) -> Result<ByteBuffer, Error> {
    let mut sizer = SizeWriter::new();
    E::encode(value, &mut sizer)?;
    let mut buffer = ByteBuffer::new(sizer.write_count());
    let mut writer = buffer.writer();
    E::encode(value, &mut writer)?;
    Ok(buffer)
}

/// Decodes a value from `bytes`, failing with [`Error::LeftOverBytes`]
/// unless the input is fully consumed.
pub fn decode_exact<D: Decoder>(bytes: &[u8]) -> Result<D::Value, Error> {
    let mut reader = ByteReader::new(bytes);
    let value = D::decode(&mut reader)?;
    reader.finish()?;
    Ok(value)
}
