//! The rest-of-input buffer codec.

use crate::{ByteBuffer, ByteReader, ByteWriter, Decoder, Encoder, Error};

/// Decoding drains whatever remains in the reader into a newly allocated
/// owned buffer; useful for trailing payloads whose format is decided
/// elsewhere. Encoding writes the buffer's full contents.
impl Decoder for ByteBuffer {
    type Value = ByteBuffer;

    fn decode(reader: &mut ByteReader<'_>) -> Result<ByteBuffer, Error> {
        let bytes = reader.read(reader.remaining())?;
        Ok(ByteBuffer::from(bytes.to_vec()))
    }
}

impl Encoder for ByteBuffer {
    type Value = ByteBuffer;

    fn encode(value: &ByteBuffer, writer: &mut impl ByteWriter) -> Result<(), Error> {
        writer.write(value.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode_to_buffer, BigEndian, ReaderExt, U16};

    #[test]
    fn test_decode_drains_remaining() {
        let mut reader = ByteReader::new(&[0x00, 0x05, 0xAA, 0xBB, 0xCC]);
        let length = reader.read_as::<U16<BigEndian>>().unwrap();
        assert_eq!(length, 5);

        let payload = reader.read_as::<ByteBuffer>().unwrap();
        assert_eq!(payload.as_slice(), &[0xAA, 0xBB, 0xCC]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_decode_empty_remainder() {
        let mut reader = ByteReader::new(&[]);
        let payload = reader.read_as::<ByteBuffer>().unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_encode_writes_contents() {
        let payload = ByteBuffer::from(vec![1, 2, 3]);
        let encoded = encode_to_buffer::<ByteBuffer>(&payload).unwrap();
        assert_eq!(encoded, payload);
    }
}
