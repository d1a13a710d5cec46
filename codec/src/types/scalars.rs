//! Byte-order-parameterized scalar codecs.
//!
//! One zero-sized tag type per wire representation: `U32<BigEndian>` and
//! `U32<LittleEndian>` are different codecs for the same 4-byte layout.
//! Unsigned integers are the base rule; signed integers and floats are
//! bit-pattern reinterpretations of their unsigned twin, with no arithmetic
//! sign extension and no numeric float conversion. 8-bit values have a
//! single order and take no order parameter.

use crate::{ByteOrder, ByteReader, ByteWriter, Decoder, Encoder, Error};
use half::f16;
use std::marker::PhantomData;

/// Codec for `u8`.
pub struct U8;

impl Decoder for U8 {
    type Value = u8;

    #[inline]
    fn decode(reader: &mut ByteReader<'_>) -> Result<u8, Error> {
        reader.read_byte()
    }
}

impl Encoder for U8 {
    type Value = u8;

    #[inline]
    fn encode(value: &u8, writer: &mut impl ByteWriter) -> Result<(), Error> {
        writer.write_byte(*value)
    }
}

/// Codec for `i8` (bit pattern of [`U8`]).
pub struct I8;

impl Decoder for I8 {
    type Value = i8;

    #[inline]
    fn decode(reader: &mut ByteReader<'_>) -> Result<i8, Error> {
        Ok(reader.read_byte()? as i8)
    }
}

impl Encoder for I8 {
    type Value = i8;

    #[inline]
    fn encode(value: &i8, writer: &mut impl ByteWriter) -> Result<(), Error> {
        writer.write_byte(*value as u8)
    }
}

macro_rules! impl_unsigned {
    ($tag:ident, $int:ty, $decode:ident, $encode:ident, $size:literal) => {
        #[doc = concat!("Codec for `", stringify!($int), "` under the byte order `O`.")]
        pub struct $tag<O>(PhantomData<O>);

        impl<O: ByteOrder> Decoder for $tag<O> {
            type Value = $int;

            #[inline]
            fn decode(reader: &mut ByteReader<'_>) -> Result<$int, Error> {
                Ok(O::$decode(reader.read_array::<$size>()?))
            }
        }

        impl<O: ByteOrder> Encoder for $tag<O> {
            type Value = $int;

            #[inline]
            fn encode(value: &$int, writer: &mut impl ByteWriter) -> Result<(), Error> {
                writer.write(&O::$encode(*value))
            }
        }
    };
}

impl_unsigned!(U16, u16, decode_u16, encode_u16, 2);
impl_unsigned!(U32, u32, decode_u32, encode_u32, 4);
impl_unsigned!(U64, u64, decode_u64, encode_u64, 8);

macro_rules! impl_signed {
    ($tag:ident, $int:ty, $utag:ident, $uint:ty) => {
        #[doc = concat!(
            "Codec for `", stringify!($int),
            "` under the byte order `O` (bit pattern of [`", stringify!($utag), "`])."
        )]
        pub struct $tag<O>(PhantomData<O>);

        impl<O: ByteOrder> Decoder for $tag<O> {
            type Value = $int;

            #[inline]
            fn decode(reader: &mut ByteReader<'_>) -> Result<$int, Error> {
                Ok($utag::<O>::decode(reader)? as $int)
            }
        }

        impl<O: ByteOrder> Encoder for $tag<O> {
            type Value = $int;

            #[inline]
            fn encode(value: &$int, writer: &mut impl ByteWriter) -> Result<(), Error> {
                $utag::<O>::encode(&(*value as $uint), writer)
            }
        }
    };
}

impl_signed!(I16, i16, U16, u16);
impl_signed!(I32, i32, U32, u32);
impl_signed!(I64, i64, U64, u64);

macro_rules! impl_float {
    ($tag:ident, $float:ty, $utag:ident) => {
        #[doc = concat!(
            "Codec for `", stringify!($float),
            "` under the byte order `O` (bit pattern of [`", stringify!($utag), "`])."
        )]
        pub struct $tag<O>(PhantomData<O>);

        impl<O: ByteOrder> Decoder for $tag<O> {
            type Value = $float;

            #[inline]
            fn decode(reader: &mut ByteReader<'_>) -> Result<$float, Error> {
                Ok(<$float>::from_bits($utag::<O>::decode(reader)?))
            }
        }

        impl<O: ByteOrder> Encoder for $tag<O> {
            type Value = $float;

            #[inline]
            fn encode(value: &$float, writer: &mut impl ByteWriter) -> Result<(), Error> {
                $utag::<O>::encode(&value.to_bits(), writer)
            }
        }
    };
}

impl_float!(F16, f16, U16);
impl_float!(F32, f32, U32);
impl_float!(F64, f64, U64);
