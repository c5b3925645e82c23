#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;
use rfc4251_codec::{
    Boolean, Byte, ByteString, Codec, DecodeExt, Encode, EncodeSize, Error, Mpint, NameList,
    ReadFrom, Uint32, Uint64, WriteTo,
};
use std::{fmt::Debug, io::Cursor};

fn roundtrip<T>(value: T)
where
    T: Codec + ReadFrom + Debug + PartialEq,
    T::Cfg: Default,
{
    let encoded = value.encode();
    assert_eq!(value.encode_size(), encoded.len());
    let decoded =
        T::decode(encoded.clone()).expect("Failed to decode a successfully encoded input!");
    assert_eq!(value, decoded);

    let mut stream = Vec::new();
    value.write_to(&mut stream).expect("Failed to write to a Vec!");
    assert_eq!(&stream[..], &encoded[..]);
    let decoded = T::read_from(&mut Cursor::new(stream)).expect("Failed to read from a stream!");
    assert_eq!(value, decoded);
}

fn roundtrip_mpint(content: &[u8]) {
    let from_content = Mpint::from_content(content).expect("content fits");
    assert_eq!(from_content.value(), &BigInt::from_signed_bytes_be(content));
    if Mpint::is_canonical(content) {
        assert_eq!(from_content.content().as_bytes(), content);
    } else {
        assert!(from_content.content().len() < content.len());
    }

    let mpint = Mpint::new(BigInt::from_signed_bytes_be(content)).expect("content fits");
    assert!(Mpint::is_canonical(mpint.content().as_bytes()));
    roundtrip(mpint);
}

fn roundtrip_names(names: Vec<String>) {
    let expect_valid = names
        .iter()
        .all(|n| !n.is_empty() && n.is_ascii() && !n.contains(','));
    match NameList::new(names.clone()) {
        Ok(list) => {
            assert!(expect_valid);
            assert_eq!(list.names(), &names[..]);
            roundtrip(list);
        }
        Err(Error::InvalidData(..)) => assert!(!expect_valid),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fn decode_untrusted(data: &[u8]) {
    // None of these may panic, whatever the input.
    let _ = Byte::decode(Bytes::copy_from_slice(data));
    let _ = Boolean::decode(Bytes::copy_from_slice(data));
    let _ = Uint32::decode(Bytes::copy_from_slice(data));
    let _ = Uint64::decode(Bytes::copy_from_slice(data));
    let _ = ByteString::decode(Bytes::copy_from_slice(data));
    let _ = Mpint::decode(Bytes::copy_from_slice(data));
    let _ = NameList::decode(Bytes::copy_from_slice(data));
    let _ = ByteString::read_from(&mut Cursor::new(data));
    let _ = NameList::read_from(&mut Cursor::new(data));
}

#[derive(Arbitrary, Debug)]
enum FuzzInput<'a> {
    Byte(u8),
    Boolean(bool),
    Uint32(u32),
    Uint64(u64),
    String(&'a [u8]),
    Mpint(&'a [u8]),
    Names(Vec<String>),
    Untrusted(&'a [u8]),
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Byte(v) => roundtrip(Byte::new(v)),
        FuzzInput::Boolean(v) => roundtrip(Boolean::new(v)),
        FuzzInput::Uint32(v) => roundtrip(Uint32::new(v)),
        FuzzInput::Uint64(v) => roundtrip(Uint64::new(v)),
        FuzzInput::String(v) => roundtrip(ByteString::copy_from_slice(v).expect("fits")),
        FuzzInput::Mpint(v) => roundtrip_mpint(v),
        FuzzInput::Names(v) => roundtrip_names(v),
        FuzzInput::Untrusted(v) => decode_untrusted(v),
    };
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
