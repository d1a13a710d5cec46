//! Format signature tags.
//!
//! Small fixed-width byte tags that identify a file format or chunk type,
//! usually spelled as ASCII ("BM", "PNG ", "RIFF"). Equality and hashing
//! are byte-wise, so tags work as map keys and in `expect_as` signature
//! checks. `Display` renders the ASCII spelling (escaped), `Debug` the raw
//! hexadecimal bytes.

use crate::{
    types::tuple::{Tuple2, Tuple4},
    ByteReader, ByteWriter, Decoder, Encoder, Error,
};
use std::fmt;

macro_rules! impl_magic {
    ($name:ident, $count:literal) => {
        #[doc = concat!("A ", stringify!($count), "-byte format signature tag.")]
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $count]);

        impl $name {
            /// Builds a tag from raw bytes.
            pub const fn new(bytes: [u8; $count]) -> Self {
                Self(bytes)
            }

            #[doc = concat!(
                "Builds a tag from an ASCII literal of exactly ",
                stringify!($count), " bytes."
            )]
            ///
            /// # Panics
            ///
            /// Panics (at compile time in const contexts) if `tag` is not
            /// ASCII or has the wrong length.
            pub const fn ascii(tag: &str) -> Self {
                let bytes = tag.as_bytes();
                assert!(bytes.len() == $count, "tag has the wrong length");
                let mut raw = [0u8; $count];
                let mut index = 0;
                while index < $count {
                    assert!(bytes[index].is_ascii(), "tag must be ASCII");
                    raw[index] = bytes[index];
                    index += 1;
                }
                Self(raw)
            }

            /// The raw tag bytes.
            pub const fn bytes(&self) -> [u8; $count] {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "\"")?;
                for byte in self.0 {
                    write!(f, "{}", byte.escape_ascii())?;
                }
                write!(f, "\"")
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "("))?;
                for (index, byte) in self.0.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{byte:#04x}")?;
                }
                write!(f, ")")
            }
        }
    };
}

impl_magic!(Magic2, 2);
impl_magic!(Magic4, 4);

impl Decoder for Magic2 {
    type Value = Magic2;

    #[inline]
    fn decode(reader: &mut ByteReader<'_>) -> Result<Magic2, Error> {
        let (byte0, byte1) = Tuple2::decode(reader)?;
        Ok(Magic2([byte0, byte1]))
    }
}

impl Encoder for Magic2 {
    type Value = Magic2;

    #[inline]
    fn encode(value: &Magic2, writer: &mut impl ByteWriter) -> Result<(), Error> {
        Tuple2::encode(&(value.0[0], value.0[1]), writer)
    }
}

impl Decoder for Magic4 {
    type Value = Magic4;

    #[inline]
    fn decode(reader: &mut ByteReader<'_>) -> Result<Magic4, Error> {
        let (byte0, byte1, byte2, byte3) = Tuple4::decode(reader)?;
        Ok(Magic4([byte0, byte1, byte2, byte3]))
    }
}

impl Encoder for Magic4 {
    type Value = Magic4;

    #[inline]
    fn encode(value: &Magic4, writer: &mut impl ByteWriter) -> Result<(), Error> {
        Tuple4::encode(&(value.0[0], value.0[1], value.0[2], value.0[3]), writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_exact, encode_to_buffer, ByteReader, Error, ReaderExt};

    const PNG: Magic4 = Magic4::ascii("PNG ");

    #[test]
    fn test_ascii_construction() {
        assert_eq!(PNG.bytes(), [0x50, 0x4E, 0x47, 0x20]);
        assert_eq!(Magic2::ascii("BM"), Magic2::new([0x42, 0x4D]));
    }

    #[test]
    fn test_round_trip() {
        let encoded = encode_to_buffer::<Magic4>(&PNG).unwrap();
        assert_eq!(encoded.as_slice(), &[0x50, 0x4E, 0x47, 0x20]);
        assert_eq!(decode_exact::<Magic4>(encoded.as_slice()), Ok(PNG));
    }

    #[test]
    fn test_equality_is_byte_wise() {
        assert_eq!(Magic4::new([0x50, 0x4E, 0x47, 0x20]), PNG);
        assert_ne!(Magic4::ascii("RIFF"), PNG);
    }

    #[test]
    fn test_signature_check() {
        let mut reader = ByteReader::new(&[0x42, 0x4D, 0x00]);
        assert_eq!(reader.expect_as::<Magic2>(&Magic2::ascii("BM")), Ok(()));
        let mut reader = ByteReader::new(&[0x42, 0x41]);
        assert_eq!(
            reader.expect_as::<Magic2>(&Magic2::ascii("BM")),
            Err(Error::UnexpectedData)
        );
    }

    #[test]
    fn test_rendering() {
        assert_eq!(PNG.to_string(), "\"PNG \"");
        assert_eq!(format!("{PNG:?}"), "Magic4(0x50, 0x4e, 0x47, 0x20)");
        // Non-printable bytes render escaped.
        let signature = Magic2::new([0x89, 0x50]);
        assert_eq!(signature.to_string(), "\"\\x89P\"");
    }
}
