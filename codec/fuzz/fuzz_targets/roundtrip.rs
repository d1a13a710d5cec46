#![no_main]

use arbitrary::Arbitrary;
use indexmap::IndexMap;
use libfuzzer_sys::fuzz_target;
use wireline_codec::{
    decode_exact, encode_to_buffer, Ascii, BigEndian, ByteReader, ByteSeq, Decoder, Encoder,
    KeyValue, LittleEndian, ReaderExt, Seq, F32, F64, I16, I32, I64, I8, U16, U32, U64, U8,
};

fn roundtrip<C>(value: &<C as Decoder>::Value)
where
    C: Decoder + Encoder<Value = <C as Decoder>::Value>,
    <C as Decoder>::Value: PartialEq + std::fmt::Debug,
{
    let encoded = encode_to_buffer::<C>(value).expect("encoding into a sized buffer cannot fail");
    let decoded =
        decode_exact::<C>(encoded.as_slice()).expect("a successful encoding must decode");
    assert_eq!(&decoded, value);
}

#[derive(Arbitrary, Debug)]
struct Input {
    unsigned8: u8,
    unsigned16: u16,
    unsigned32: u32,
    unsigned64: u64,
    signed8: i8,
    signed16: i16,
    signed32: i32,
    signed64: i64,
    float32: u32,
    float64: u64,
    bytes: Vec<u8>,
    elements: Vec<u16>,
    pairs: Vec<(u8, u32)>,
}

fuzz_target!(|input: Input| {
    roundtrip::<U8>(&input.unsigned8);
    roundtrip::<U16<BigEndian>>(&input.unsigned16);
    roundtrip::<U16<LittleEndian>>(&input.unsigned16);
    roundtrip::<U32<BigEndian>>(&input.unsigned32);
    roundtrip::<U32<LittleEndian>>(&input.unsigned32);
    roundtrip::<U64<BigEndian>>(&input.unsigned64);
    roundtrip::<U64<LittleEndian>>(&input.unsigned64);
    roundtrip::<I8>(&input.signed8);
    roundtrip::<I16<BigEndian>>(&input.signed16);
    roundtrip::<I32<LittleEndian>>(&input.signed32);
    roundtrip::<I64<BigEndian>>(&input.signed64);

    // Compare floats by bit pattern so NaN payloads survive the check.
    let float32 = f32::from_bits(input.float32);
    let encoded = encode_to_buffer::<F32<BigEndian>>(&float32).unwrap();
    let decoded = decode_exact::<F32<BigEndian>>(encoded.as_slice()).unwrap();
    assert_eq!(decoded.to_bits(), input.float32);

    let float64 = f64::from_bits(input.float64);
    let encoded = encode_to_buffer::<F64<LittleEndian>>(&float64).unwrap();
    let decoded = decode_exact::<F64<LittleEndian>>(encoded.as_slice()).unwrap();
    assert_eq!(decoded.to_bits(), input.float64);

    // Caller-counted shapes.
    let encoded = encode_to_buffer::<ByteSeq>(&input.bytes).unwrap();
    let mut reader = ByteReader::new(encoded.as_slice());
    assert_eq!(reader.read_n::<ByteSeq>(input.bytes.len()).unwrap(), input.bytes);

    let encoded = encode_to_buffer::<Seq<U16<BigEndian>>>(&input.elements).unwrap();
    assert_eq!(encoded.len(), input.elements.len() * 2);
    let mut reader = ByteReader::new(encoded.as_slice());
    assert_eq!(
        reader.read_n::<Seq<U16<BigEndian>>>(input.elements.len()).unwrap(),
        input.elements
    );

    let pairs: IndexMap<u8, u32> = input.pairs.iter().copied().collect();
    let encoded = encode_to_buffer::<KeyValue<U8, U32<BigEndian>>>(&pairs).unwrap();
    let mut reader = ByteReader::new(encoded.as_slice());
    let decoded = reader
        .read_n::<KeyValue<U8, U32<BigEndian>>>(pairs.len())
        .unwrap();
    assert_eq!(decoded, pairs);

    // ASCII text decodes losslessly when the input really is ASCII.
    if input.bytes.iter().all(|byte| byte.is_ascii()) {
        let mut reader = ByteReader::new(&input.bytes);
        let text = reader.read_n::<Ascii>(input.bytes.len()).unwrap();
        assert_eq!(text.as_bytes(), &input.bytes[..]);
    }
});
