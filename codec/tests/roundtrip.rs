//! End-to-end exercises composing cursors and codecs the way a format
//! layer would.

use indexmap::IndexMap;
use wireline_codec::{
    encode_to_buffer, Ascii, BigEndian, ByteBuffer, ByteReader, ByteWriter, Cp1252, Error,
    KeyValue, LittleEndian, Magic4, ReaderExt, Seq, SizeWriter, SpanWriter, WriterExt, F32, U16,
    U32, U8,
};

/// A fictional asset bundle: signature, version, an attribute table, a
/// float array aligned to 4 bytes, and a trailing payload.
#[derive(Debug, PartialEq)]
struct Bundle {
    version: u16,
    attributes: IndexMap<String, u32>,
    samples: Vec<f32>,
    payload: ByteBuffer,
}

const SIGNATURE: Magic4 = Magic4::ascii("BNDL");

impl Bundle {
    fn write(&self, writer: &mut impl ByteWriter) -> Result<(), Error> {
        writer.write_as::<Magic4>(&SIGNATURE)?;
        writer.write_as::<U16<BigEndian>>(&self.version)?;
        writer.write_as::<U8>(&(self.attributes.len() as u8))?;
        for (name, value) in &self.attributes {
            writer.write_as::<U8>(&(name.len() as u8))?;
            writer.write_as::<Ascii>(name)?;
            writer.write_as::<U32<BigEndian>>(value)?;
        }
        writer.write_as::<U8>(&(self.samples.len() as u8))?;
        writer.align_to(4)?;
        writer.write_as::<Seq<F32<BigEndian>>>(&self.samples)?;
        writer.write_as::<ByteBuffer>(&self.payload)?;
        Ok(())
    }

    fn read(reader: &mut ByteReader<'_>) -> Result<Self, Error> {
        reader.expect_as::<Magic4>(&SIGNATURE)?;
        let version = reader.read_as::<U16<BigEndian>>()?;
        let attribute_count = reader.read_as::<U8>()? as usize;
        let mut attributes = IndexMap::with_capacity(attribute_count);
        for _ in 0..attribute_count {
            let name_len = reader.read_as::<U8>()? as usize;
            let name = reader.read_n::<Ascii>(name_len)?;
            let value = reader.read_as::<U32<BigEndian>>()?;
            attributes.insert(name, value);
        }
        let sample_count = reader.read_as::<U8>()? as usize;
        reader.align_to(4)?;
        let samples = reader.read_n::<Seq<F32<BigEndian>>>(sample_count)?;
        let payload = reader.read_as::<ByteBuffer>()?;
        Ok(Self {
            version,
            attributes,
            samples,
            payload,
        })
    }
}

fn sample_bundle() -> Bundle {
    let mut attributes = IndexMap::new();
    attributes.insert("width".to_string(), 640);
    attributes.insert("height".to_string(), 480);
    Bundle {
        version: 3,
        attributes,
        samples: vec![1.0, -0.5, 2.25],
        payload: ByteBuffer::from(vec![0xDE, 0xAD, 0xBE, 0xEF]),
    }
}

#[test]
fn bundle_round_trip() {
    let bundle = sample_bundle();

    // Measure, then encode into an exactly-sized buffer.
    let mut sizer = SizeWriter::new();
    bundle.write(&mut sizer).unwrap();
    let mut buffer = ByteBuffer::new(sizer.write_count());
    let mut writer = buffer.writer();
    bundle.write(&mut writer).unwrap();
    assert_eq!(writer.remaining(), 0);

    let mut reader = buffer.reader();
    let decoded = Bundle::read(&mut reader).unwrap();
    assert_eq!(reader.remaining(), 0);
    assert_eq!(decoded, bundle);
}

#[test]
fn bundle_signature_mismatch() {
    let buffer = encode_to_buffer::<Magic4>(&Magic4::ascii("JUNK")).unwrap();
    let mut reader = buffer.reader();
    assert_eq!(Bundle::read(&mut reader), Err(Error::UnexpectedData));
    // Rejecting content still consumed the signature bytes.
    assert_eq!(reader.read_count(), 4);
}

#[test]
fn bundle_truncated_fails_cleanly() {
    let bundle = sample_bundle();
    let mut sizer = SizeWriter::new();
    bundle.write(&mut sizer).unwrap();
    let mut buffer = ByteBuffer::new(sizer.write_count());
    bundle.write(&mut buffer.writer()).unwrap();

    // Every proper prefix fails with a bounds error, never a panic. Cuts
    // landing after the samples succeed with a shorter rest-of-input
    // payload, since nothing on the wire pins its length.
    for cut in 0..buffer.len() {
        let mut reader = ByteReader::new(&buffer.as_slice()[..cut]);
        match Bundle::read(&mut reader) {
            Err(Error::NotEnoughBytes) | Err(Error::UnexpectedData) => {}
            Ok(decoded) => assert!(decoded.payload.len() < bundle.payload.len()),
            other => panic!("unexpected result at cut {cut}: {other:?}"),
        }
    }
}

#[test]
fn bundle_write_rejects_undersized_buffer() {
    let bundle = sample_bundle();
    let mut bytes = [0u8; 8];
    let mut writer = SpanWriter::new(&mut bytes);
    assert_eq!(bundle.write(&mut writer), Err(Error::TooManyBytes));
}

#[test]
fn size_writer_matches_span_writer_everywhere() {
    let mut pairs = IndexMap::new();
    pairs.insert("id".to_string(), 7u32);
    pairs.insert("rev".to_string(), 2u32);

    let mut sizer = SizeWriter::new();
    sizer.write_as::<KeyValue<Utf8Len3, U32<LittleEndian>>>(&pairs).unwrap();

    let encoded = encode_to_buffer::<KeyValue<Utf8Len3, U32<LittleEndian>>>(&pairs).unwrap();
    assert_eq!(sizer.write_count(), encoded.len());
}

/// A little fixed-width string codec, the kind format layers define for
/// themselves on top of the framework.
struct Utf8Len3;

impl wireline_codec::Decoder for Utf8Len3 {
    type Value = String;

    fn decode(reader: &mut ByteReader<'_>) -> Result<String, Error> {
        let length = reader.read_as::<U8>()? as usize;
        reader.read_n::<wireline_codec::Utf8>(length)
    }
}

impl wireline_codec::Encoder for Utf8Len3 {
    type Value = String;

    fn encode(value: &String, writer: &mut impl ByteWriter) -> Result<(), Error> {
        writer.write_as::<U8>(&(value.len() as u8))?;
        writer.write_as::<wireline_codec::Utf8>(value)
    }
}

#[test]
fn custom_codec_composes_with_maps() {
    let mut pairs = IndexMap::new();
    pairs.insert("name".to_string(), 1u32);
    pairs.insert("size".to_string(), 2u32);

    let encoded = encode_to_buffer::<KeyValue<Utf8Len3, U32<BigEndian>>>(&pairs).unwrap();
    let mut reader = ByteReader::new(encoded.as_slice());
    let decoded = reader
        .read_n::<KeyValue<Utf8Len3, U32<BigEndian>>>(2)
        .unwrap();
    assert_eq!(decoded, pairs);
    reader.finish().unwrap();
}

#[test]
fn cp1252_text_block_in_frame() {
    // Length-prefixed legacy text, as older formats carry it.
    let text = "résumé — €9".to_string();
    let mut buffer = ByteBuffer::new(1 + text.chars().count());
    let mut writer = buffer.writer();
    writer.write_as::<U8>(&(text.chars().count() as u8)).unwrap();
    writer.write_as::<Cp1252>(&text).unwrap();
    assert_eq!(writer.remaining(), 0);

    let mut reader = buffer.reader();
    let length = reader.read_as::<U8>().unwrap() as usize;
    assert_eq!(reader.read_n::<Cp1252>(length).unwrap(), text);
}
