//! Caller-counted sequences and ordered key/value maps.

use crate::{ByteReader, ByteWriter, Decoder, Encoder, Error, SeqDecoder};
use indexmap::IndexMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Codec for a homogeneous sequence of `E`-encoded elements.
///
/// Decoding reads a caller-supplied count of elements in order, reserving
/// capacity up front; encoding writes each element in sequence order. The
/// count itself never appears on the wire.
pub struct Seq<E>(PhantomData<E>);

impl<E: Decoder> SeqDecoder for Seq<E> {
    type Value = Vec<E::Value>;

    fn decode_n(reader: &mut ByteReader<'_>, count: usize) -> Result<Self::Value, Error> {
        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            elements.push(E::decode(reader)?);
        }
        Ok(elements)
    }
}

impl<E: Encoder> Encoder for Seq<E> {
    type Value = Vec<E::Value>;

    fn encode(elements: &Self::Value, writer: &mut impl ByteWriter) -> Result<(), Error> {
        for element in elements {
            E::encode(element, writer)?;
        }
        Ok(())
    }
}

/// Codec for a raw byte run, the `Seq<U8>` fast path.
pub struct ByteSeq;

impl SeqDecoder for ByteSeq {
    type Value = Vec<u8>;

    fn decode_n(reader: &mut ByteReader<'_>, count: usize) -> Result<Vec<u8>, Error> {
        Ok(reader.read(count)?.to_vec())
    }
}

impl Encoder for ByteSeq {
    type Value = Vec<u8>;

    fn encode(bytes: &Vec<u8>, writer: &mut impl ByteWriter) -> Result<(), Error> {
        writer.write(bytes)
    }
}

/// Codec for an ordered key/value sequence.
///
/// Pairs appear on the wire as key then value, the single canonical order.
/// Decoding a caller-supplied count of pairs produces an [`IndexMap`] that
/// preserves first-insertion order; a duplicate key overwrites the earlier
/// value but keeps its original position. Encoding iterates the map and
/// writes each pair back key then value.
pub struct KeyValue<K, V>(PhantomData<(K, V)>);

impl<K, V> SeqDecoder for KeyValue<K, V>
where
    K: Decoder,
    V: Decoder,
    K::Value: Hash + Eq,
{
    type Value = IndexMap<K::Value, V::Value>;

    fn decode_n(reader: &mut ByteReader<'_>, count: usize) -> Result<Self::Value, Error> {
        let mut pairs = IndexMap::with_capacity(count);
        for _ in 0..count {
            let key = K::decode(reader)?;
            let value = V::decode(reader)?;
            pairs.insert(key, value);
        }
        Ok(pairs)
    }
}

impl<K, V> Encoder for KeyValue<K, V>
where
    K: Encoder,
    V: Encoder,
    K::Value: Hash + Eq,
{
    type Value = IndexMap<K::Value, V::Value>;

    fn encode(pairs: &Self::Value, writer: &mut impl ByteWriter) -> Result<(), Error> {
        for (key, value) in pairs {
            K::encode(key, writer)?;
            V::encode(value, writer)?;
        }
        Ok(())
    }
}
