//! The RFC 4251 `mpint`: a signed integer carried as the content of a `string`.
//!
//! The content is the two's-complement, big-endian representation of the integer using the
//! fewest octets that preserve its sign. Zero is the empty string. A non-negative value whose
//! leading octet would have the high bit set gains a `0x00` prefix; a negative value is
//! sign-extended only as far as needed to set the high bit.
//!
//! | Value        | Content            |
//! |--------------|--------------------|
//! | `0`          | (empty)            |
//! | `0x80`       | `00 80`            |
//! | `-1`         | `ff`               |
//! | `-0x1234`    | `ed cc`            |
//! | `-0xdeadbeef`| `ff 21 52 41 11`   |
//!
//! Decoding accepts any content, canonical or not. [`Mpint::is_canonical`] reports whether a
//! content sequence is the form an encoder would have produced.

use crate::{
    types::string::read_len,
    util::{at_least, length_prefix},
    ByteString, EncodeSize, Error, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut, Bytes};
use num_bigint::BigInt;
use num_traits::Zero;

/// A multiple-precision integer together with its canonical content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mpint {
    value: BigInt,
    content: ByteString,
}

impl Mpint {
    /// Wraps `value`, failing with [`Error::LengthLimitExceeded`] if its canonical content does
    /// not fit in a `string`.
    pub fn new(value: BigInt) -> Result<Self, Error> {
        let bytes = Self::to_content(&value);
        length_prefix(bytes.len())?;
        Ok(Self {
            value,
            content: ByteString::from_bytes_unchecked(Bytes::from(bytes)),
        })
    }

    /// Interprets `content` as a two's-complement, big-endian integer.
    ///
    /// The empty sequence is zero and redundant leading octets are accepted. Fails with
    /// [`Error::LengthLimitExceeded`] if `content` could not be carried by a `string`.
    pub fn from_content(content: &[u8]) -> Result<Self, Error> {
        length_prefix(content.len())?;
        Ok(Self::from_bounded(content))
    }

    // `content` must already fit in a `string`.
    fn from_bounded(content: &[u8]) -> Self {
        let value = BigInt::from_signed_bytes_be(content);
        // Canonical content is never longer than the content it was decoded from.
        let bytes = Self::to_content(&value);
        Self {
            value,
            content: ByteString::from_bytes_unchecked(Bytes::from(bytes)),
        }
    }

    /// Returns the canonical content for `value`.
    pub fn to_content(value: &BigInt) -> Vec<u8> {
        if value.is_zero() {
            return Vec::new();
        }
        value.to_signed_bytes_be()
    }

    /// Returns true if `content` is the minimal encoding of the integer it represents.
    pub fn is_canonical(content: &[u8]) -> bool {
        match content {
            [] => true,
            [0x00] => false,
            [0x00, next, ..] => next & 0x80 != 0,
            [0xFF, next, ..] => next & 0x80 == 0,
            _ => true,
        }
    }

    /// Returns the integer.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Consumes the wrapper and returns the integer.
    pub fn into_value(self) -> BigInt {
        self.value
    }

    /// Returns the canonical content (without the length prefix).
    pub fn content(&self) -> &ByteString {
        &self.content
    }
}

impl PartialOrd for Mpint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mpint {
    // Numeric order; the content is a function of the value.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl TryFrom<BigInt> for Mpint {
    type Error = Error;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mpint> for BigInt {
    fn from(value: Mpint) -> Self {
        value.value
    }
}

impl From<&ByteString> for Mpint {
    fn from(content: &ByteString) -> Self {
        Self::from_bounded(content.as_bytes())
    }
}

impl From<Mpint> for ByteString {
    fn from(value: Mpint) -> Self {
        value.content
    }
}

impl From<&ByteString> for BigInt {
    fn from(content: &ByteString) -> Self {
        BigInt::from_signed_bytes_be(content.as_bytes())
    }
}

impl TryFrom<&BigInt> for ByteString {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        ByteString::try_from(Mpint::to_content(value))
    }
}

impl Write for Mpint {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.content.write(buf);
    }
}

impl EncodeSize for Mpint {
    #[inline]
    fn encode_size(&self) -> usize {
        self.content.encode_size()
    }
}

impl Read for Mpint {
    type Cfg = RangeCfg<usize>;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &Self::Cfg) -> Result<Self, Error> {
        let len = read_len(buf, range)?;
        at_least(buf, len)?;
        let content = buf.copy_to_bytes(len);
        Ok(Self::from_bounded(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeExt, Encode};

    fn content(value: i64) -> Vec<u8> {
        Mpint::new(BigInt::from(value))
            .unwrap()
            .content()
            .as_bytes()
            .to_vec()
    }

    #[test]
    fn test_rfc4251_examples() {
        assert_eq!(content(0), Vec::<u8>::new());
        assert_eq!(
            Mpint::new(BigInt::parse_bytes(b"9a378f9b2e332a7", 16).unwrap())
                .unwrap()
                .encode(),
            &[0x00, 0x00, 0x00, 0x08, 0x09, 0xa3, 0x78, 0xf9, 0xb2, 0xe3, 0x32, 0xa7][..]
        );
        assert_eq!(content(0x80), vec![0x00, 0x80]);
        assert_eq!(content(-0x1234), vec![0xed, 0xcc]);
        assert_eq!(content(-0xdead_beef), vec![0xff, 0x21, 0x52, 0x41, 0x11]);
    }

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(content(-1), vec![0xFF]);
        assert_eq!(content(1), vec![0x01]);
        assert_eq!(content(0x7F), vec![0x7F]);
        assert_eq!(content(0xFF), vec![0x00, 0xFF]);
        assert_eq!(content(-0x80), vec![0x80]);
        assert_eq!(content(-0x81), vec![0xFF, 0x7F]);
        assert_eq!(content(-0x100), vec![0xFF, 0x00]);
        assert_eq!(content(-0x8000), vec![0x80, 0x00]);
        assert_eq!(content(0x8000), vec![0x00, 0x80, 0x00]);
    }

    #[test]
    fn test_value_round_trip() {
        let values = [
            BigInt::zero(),
            BigInt::from(1),
            BigInt::from(-1),
            BigInt::from(i64::MIN),
            BigInt::from(i64::MAX),
            BigInt::from(u64::MAX),
            -(BigInt::from(1) << 521u32),
            (BigInt::from(1) << 2048u32) - 1u32,
        ];
        for value in values {
            let mpint = Mpint::new(value.clone()).unwrap();
            assert!(Mpint::is_canonical(mpint.content().as_bytes()));

            let decoded = Mpint::decode(mpint.encode()).unwrap();
            assert_eq!(decoded.value(), &value);
            assert_eq!(decoded, mpint);
        }
    }

    #[test]
    fn test_canonical_content_round_trip() {
        let canonical: [&[u8]; 7] = [
            &[],
            &[0x01],
            &[0x7F],
            &[0x00, 0x80],
            &[0xFF],
            &[0x80],
            &[0xFF, 0x00, 0x12],
        ];
        for bytes in canonical {
            assert!(Mpint::is_canonical(bytes), "{bytes:02x?}");
            let mpint = Mpint::from_content(bytes).unwrap();
            assert_eq!(mpint.content().as_bytes(), bytes);
        }
    }

    #[test]
    fn test_non_canonical_content_is_accepted() {
        let cases: [(&[u8], &[u8]); 4] = [
            (&[0x00], &[]),
            (&[0x00, 0x01], &[0x01]),
            (&[0xFF, 0xFF], &[0xFF]),
            (&[0xFF, 0x80], &[0x80]),
        ];
        for (raw, canonical) in cases {
            assert!(!Mpint::is_canonical(raw), "{raw:02x?}");
            let mpint = Mpint::from_content(raw).unwrap();
            assert_eq!(mpint.content().as_bytes(), canonical);
            assert_eq!(mpint.value(), &BigInt::from_signed_bytes_be(raw));
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_from_content_length_limit() {
        // Zeroed allocations are lazy, and the length is checked before the content is read.
        let content = vec![0u8; ByteString::MAX_LEN + 1];
        assert!(matches!(
            Mpint::from_content(&content),
            Err(Error::LengthLimitExceeded(len)) if len == 1 << 32
        ));
    }

    #[test]
    fn test_byte_string_view() {
        let value = BigInt::from(-0x1234);
        let string = ByteString::try_from(&value).unwrap();
        assert_eq!(string.as_bytes(), &[0xed, 0xcc]);
        assert_eq!(BigInt::from(&string), value);

        let empty = ByteString::new();
        assert_eq!(BigInt::from(&empty), BigInt::zero());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let mut values: Vec<Mpint> = [5i64, -300, 0, 128, -1]
            .into_iter()
            .map(|v| Mpint::new(BigInt::from(v)).unwrap())
            .collect();
        values.sort();
        let sorted: Vec<BigInt> = values.into_iter().map(BigInt::from).collect();
        let expected: Vec<BigInt> = [-300i64, -1, 0, 5, 128].into_iter().map(BigInt::from).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_truncated() {
        assert!(matches!(
            Mpint::decode(&[0x00u8, 0x00, 0x00, 0x02, 0x01][..]),
            Err(Error::TruncatedInput)
        ));
    }
}
