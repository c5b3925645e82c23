//! Blocking stream adapters.
//!
//! The codec traits operate on in-memory buffers. The traits here move values across a caller's
//! [`std::io::Read`] or [`std::io::Write`] without buffering more than the value being assembled:
//! a fixed-size value reads exactly its size, and a string reads its prefix and then exactly the
//! announced number of octets. An early end of stream surfaces as [`Error::TruncatedInput`].

use crate::{
    types::string::read_len, Boolean, Byte, ByteString, Encode, Error, FixedSize, Mpint, NameList,
    RangeCfg, Read, Uint32, Uint64,
};
use bytes::Bytes;
use std::io::{self, Read as _, Write as _};
use tracing::{debug, trace};

/// Trait for types that can be written to a blocking stream.
pub trait WriteTo {
    /// Encodes this value and writes all of it to `writer`.
    fn write_to(&self, writer: &mut impl io::Write) -> Result<(), Error>;
}

impl<T: Encode> WriteTo for T {
    fn write_to(&self, writer: &mut impl io::Write) -> Result<(), Error> {
        let encoded = self.encode();
        writer.write_all(&encoded).map_err(|err| {
            debug!(?err, len = encoded.len(), "failed to write value");
            Error::from(err)
        })
    }
}

/// Trait for types that can be read from a blocking stream.
pub trait ReadFrom: Read {
    /// Reads exactly one value from `reader` using the provided configuration `cfg`.
    fn read_from_cfg(reader: &mut impl io::Read, cfg: &Self::Cfg) -> Result<Self, Error>;

    /// Reads exactly one value from `reader` using `Cfg::default()`.
    fn read_from(reader: &mut impl io::Read) -> Result<Self, Error>
    where
        Self::Cfg: Default,
    {
        Self::read_from_cfg(reader, &Self::Cfg::default())
    }
}

fn read_exact<const N: usize>(reader: &mut impl io::Read) -> Result<[u8; N], Error> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|err| {
        trace!(?err, size = N, "short read");
        Error::from(err)
    })?;
    Ok(buf)
}

macro_rules! impl_read_from_fixed {
    ($type:ty) => {
        impl ReadFrom for $type {
            fn read_from_cfg(reader: &mut impl io::Read, cfg: &()) -> Result<Self, Error> {
                let buf = read_exact::<{ <$type as FixedSize>::SIZE }>(reader)?;
                Self::read_cfg(&mut &buf[..], cfg)
            }
        }
    };
}

impl_read_from_fixed!(Byte);
impl_read_from_fixed!(Boolean);
impl_read_from_fixed!(Uint32);
impl_read_from_fixed!(Uint64);

impl ReadFrom for ByteString {
    fn read_from_cfg(reader: &mut impl io::Read, range: &RangeCfg<usize>) -> Result<Self, Error> {
        let prefix = read_exact::<{ Uint32::SIZE }>(reader)?;
        let len = read_len(&mut &prefix[..], range)?;

        // `take` bounds the read so an oversized prefix cannot force a large allocation.
        let mut data = Vec::new();
        reader.by_ref().take(len as u64).read_to_end(&mut data)?;
        if data.len() < len {
            debug!(expected = len, actual = data.len(), "truncated string");
            return Err(Error::TruncatedInput);
        }
        Ok(ByteString::from_bytes_unchecked(Bytes::from(data)))
    }
}

impl ReadFrom for Mpint {
    fn read_from_cfg(reader: &mut impl io::Read, range: &RangeCfg<usize>) -> Result<Self, Error> {
        let content = ByteString::read_from_cfg(reader, range)?;
        Ok(Self::from(&content))
    }
}

impl ReadFrom for NameList {
    fn read_from_cfg(reader: &mut impl io::Read, range: &RangeCfg<usize>) -> Result<Self, Error> {
        let content = ByteString::read_from_cfg(reader, range)?;
        Self::from_content(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use std::io::Cursor;

    /// A writer that accepts a fixed number of bytes and then fails.
    struct Limited {
        remaining: usize,
        written: Vec<u8>,
    }

    impl io::Write for Limited {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            let n = buf.len().min(self.remaining);
            self.written.extend_from_slice(&buf[..n]);
            self.remaining -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sequential_stream() {
        let mut stream = Vec::new();
        Byte::new(13).write_to(&mut stream).unwrap();
        Boolean::new(true).write_to(&mut stream).unwrap();
        Uint32::new(0xDEAD_BEEF).write_to(&mut stream).unwrap();
        Uint64::new(u64::MAX - 1).write_to(&mut stream).unwrap();
        ByteString::try_from("ssh-ed25519")
            .unwrap()
            .write_to(&mut stream)
            .unwrap();
        Mpint::new(BigInt::from(-129))
            .unwrap()
            .write_to(&mut stream)
            .unwrap();
        NameList::new(["a", "b"])
            .unwrap()
            .write_to(&mut stream)
            .unwrap();

        let mut reader = Cursor::new(stream);
        assert_eq!(Byte::read_from(&mut reader).unwrap().get(), 13);
        assert!(Boolean::read_from(&mut reader).unwrap().get());
        assert_eq!(Uint32::read_from(&mut reader).unwrap().get(), 0xDEAD_BEEF);
        assert_eq!(Uint64::read_from(&mut reader).unwrap().get(), u64::MAX - 1);
        assert_eq!(
            ByteString::read_from(&mut reader).unwrap().as_bytes(),
            b"ssh-ed25519"
        );
        assert_eq!(
            Mpint::read_from(&mut reader).unwrap().value(),
            &BigInt::from(-129)
        );
        assert_eq!(NameList::read_from(&mut reader).unwrap().names(), &["a", "b"]);

        // The stream is exhausted.
        assert!(matches!(
            Byte::read_from(&mut reader),
            Err(Error::TruncatedInput)
        ));
    }

    #[test]
    fn test_fixed_truncated() {
        let mut reader = Cursor::new(vec![0x00u8, 0x01]);
        assert!(matches!(
            Uint32::read_from(&mut reader),
            Err(Error::TruncatedInput)
        ));
    }

    #[test]
    fn test_string_truncated() {
        let mut reader = Cursor::new(vec![0u8, 0, 0, 10, 1, 2, 3]);
        assert!(matches!(
            ByteString::read_from(&mut reader),
            Err(Error::TruncatedInput)
        ));
    }

    #[test]
    fn test_string_consumes_exactly_its_length() {
        let mut reader = Cursor::new(vec![0, 0, 0, 2, b'h', b'i', 0xFF]);
        let value = ByteString::read_from(&mut reader).unwrap();
        assert_eq!(value.as_bytes(), b"hi");
        assert_eq!(reader.position(), 6);
    }

    #[test]
    fn test_string_range() {
        // Only the prefix is consumed when the configured range rejects it.
        let mut reader = Cursor::new(vec![0x7Fu8, 0xFF, 0xFF, 0xFF]);
        assert!(matches!(
            ByteString::read_from_cfg(&mut reader, &(..=4096).into()),
            Err(Error::InvalidLength(0x7FFF_FFFF))
        ));
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn test_write_failure() {
        let mut writer = Limited {
            remaining: 3,
            written: Vec::new(),
        };
        let result = Uint64::new(1).write_to(&mut writer);
        assert!(matches!(result, Err(Error::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(writer.written.len(), 3);
    }

    #[test]
    fn test_name_list_errors_propagate() {
        let mut reader = Cursor::new(b"\x00\x00\x00\x02a,".to_vec());
        assert!(matches!(
            NameList::read_from(&mut reader),
            Err(Error::InvalidData(ctx, _)) if ctx == "NameList"
        ));
    }
}
