//! Fixed-width byte tuples.
//!
//! The positional building block beneath magic tags and other small
//! fixed-shape fields. Decoding `TupleN` reads exactly `N` bytes and
//! exposes them positionally; encoding writes them back in the same order.

use crate::{ByteReader, ByteWriter, Decoder, Encoder, Error};

macro_rules! impl_byte_tuple {
    ($tag:ident, $count:literal, ($($elem:ty),+), ($($index:tt),+)) => {
        #[doc = concat!("Codec for a ", stringify!($count), "-byte positional tuple.")]
        pub struct $tag;

        impl Decoder for $tag {
            type Value = ($($elem,)+);

            #[inline]
            fn decode(reader: &mut ByteReader<'_>) -> Result<Self::Value, Error> {
                let bytes = reader.read($count)?;
                Ok(($(bytes[$index],)+))
            }
        }

        impl Encoder for $tag {
            type Value = ($($elem,)+);

            #[inline]
            fn encode(value: &Self::Value, writer: &mut impl ByteWriter) -> Result<(), Error> {
                writer.write(&[$(value.$index),+])
            }
        }
    };
}

impl_byte_tuple!(Tuple2, 2, (u8, u8), (0, 1));
impl_byte_tuple!(Tuple3, 3, (u8, u8, u8), (0, 1, 2));
impl_byte_tuple!(Tuple4, 4, (u8, u8, u8, u8), (0, 1, 2, 3));
impl_byte_tuple!(
    Tuple8,
    8,
    (u8, u8, u8, u8, u8, u8, u8, u8),
    (0, 1, 2, 3, 4, 5, 6, 7)
);
impl_byte_tuple!(
    Tuple16,
    16,
    (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8),
    (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15)
);
