//! Core codec traits and implementations

use crate::error::Error;
use bytes::{Buf, BufMut, BytesMut};

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer.
    ///
    /// Implementations should panic if the buffer doesn't have enough capacity.
    fn write(&self, buf: &mut impl BufMut);
}

/// Trait for types that can be read (decoded) from a buffer.
///
/// The `Cfg` associated type allows for configuration during the read process. For example, it
/// can be used to bound the length of a string when decoding untrusted data. Use `()` for types
/// that do not require configuration.
pub trait Read: Sized {
    /// The configuration consumed by [`Read::read_cfg`].
    type Cfg;

    /// Reads a value from the buffer using the provided configuration `cfg`, consuming the
    /// necessary bytes.
    ///
    /// Returns an error if decoding fails (e.g., invalid data, not enough bytes).
    fn read_cfg(buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<Self, Error>;
}

/// Trait for types that know the exact number of bytes they encode to.
pub trait EncodeSize {
    /// Returns the encoded size of this value.
    ///
    /// This method MUST return the exact number of bytes that will be written by `write()`.
    fn encode_size(&self) -> usize;
}

/// Trait for types with a known, fixed encoded size.
pub trait FixedSize {
    /// The size of the encoded value.
    const SIZE: usize;
}

// Automatically implement `EncodeSize` for types with a known size.
// Otherwise, the type must define its own `encode_size()` method.
impl<T: FixedSize> EncodeSize for T {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

/// Trait for types that can be encoded to a fresh buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes a value to a `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write the expected number of bytes.
    ///
    /// (Provided method).
    fn encode(&self) -> BytesMut {
        let len = self.encode_size();
        let mut buffer = BytesMut::with_capacity(len);
        self.write(&mut buffer);
        assert_eq!(buffer.len(), len, "write() did not write expected bytes");
        buffer
    }
}

// Automatically implement `Encode` for types that implement `Write` and `EncodeSize`.
impl<T: Write + EncodeSize> Encode for T {}

/// Trait for types that can be decoded from a buffer, ensuring the entire buffer is consumed.
pub trait Decode: Read {
    /// Decodes a value from a buffer, ensuring the buffer is fully consumed.
    ///
    /// (Provided method).
    fn decode_cfg(mut buf: impl Buf, cfg: &Self::Cfg) -> Result<Self, Error> {
        let result = Self::read_cfg(&mut buf, cfg)?;

        // Check that the buffer is fully consumed.
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }

        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Trait for types that can be encoded and decoded.
pub trait Codec: Encode + Decode {}

// Automatically implement `Codec` for types that implement `Encode` and `Decode`.
impl<T: Encode + Decode> Codec for T {}

/// Extension trait providing an ergonomic read method using the default configuration.
pub trait ReadExt: Read {
    /// Reads a value using `Cfg::default()`.
    fn read(buf: &mut impl Buf) -> Result<Self, Error>
    where
        Self::Cfg: Default,
    {
        Self::read_cfg(buf, &Self::Cfg::default())
    }
}

// Automatically implement `ReadExt` for types that implement `Read`.
impl<T: Read> ReadExt for T {}

/// Extension trait providing an ergonomic decode method using the default configuration.
pub trait DecodeExt: Decode {
    /// Decodes a value using `Cfg::default()`.
    fn decode(buf: impl Buf) -> Result<Self, Error>
    where
        Self::Cfg: Default,
    {
        Self::decode_cfg(buf, &Self::Cfg::default())
    }
}

// Automatically implement `DecodeExt` for types that implement `Decode`.
impl<T: Decode> DecodeExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteString, Error, Uint32};
    use bytes::Bytes;

    #[test]
    fn test_insufficient_buffer() {
        let mut reader = Bytes::from_static(&[0x01, 0x02]);
        assert!(matches!(Uint32::read(&mut reader), Err(Error::TruncatedInput)));
    }

    #[test]
    fn test_extra_data() {
        let encoded = Bytes::from_static(&[0x01, 0x02, 0x03, 0x04, 0x05]);
        assert!(matches!(Uint32::decode(encoded), Err(Error::ExtraData(1))));
    }

    #[test]
    fn test_read_leaves_remainder() {
        let mut reader = Bytes::from_static(&[0x00, 0x00, 0x00, 0x01, b'a', 0xFF]);
        let value = ByteString::read(&mut reader).unwrap();
        assert_eq!(value.as_bytes(), b"a");
        assert_eq!(&reader[..], &[0xFF]);
    }

    #[test]
    fn test_encode_matches_encode_size() {
        let value = ByteString::try_from("hello").unwrap();
        assert_eq!(value.encode_size(), 4 + 5);
        assert_eq!(value.encode().len(), value.encode_size());
    }
}
