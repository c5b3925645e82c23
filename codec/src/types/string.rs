//! The RFC 4251 `string`: a `uint32` length followed by that many arbitrary octets.
//!
//! A [`ByteString`] can only be constructed with content whose length fits in the prefix, so
//! every value that exists can be encoded.

use crate::{
    util::{at_least, length_prefix},
    EncodeSize, Error, FixedSize, RangeCfg, Read, ReadExt, Uint32, Write,
};
use bytes::{Buf, BufMut, Bytes};
use std::borrow::Borrow;
use tracing::debug;

/// Length-prefixed binary data.
///
/// Equality, ordering, and hashing consider only the content, compared byte-wise.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteString(Bytes);

impl ByteString {
    /// The longest content a `uint32` prefix can describe.
    pub const MAX_LEN: usize = u32::MAX as usize;

    /// Creates an empty string.
    pub const fn new() -> Self {
        Self(Bytes::new())
    }

    /// Copies `data` into a new string.
    ///
    /// Fails with [`Error::LengthLimitExceeded`] before copying if `data` is too long.
    pub fn copy_from_slice(data: &[u8]) -> Result<Self, Error> {
        length_prefix(data.len())?;
        Ok(Self(Bytes::copy_from_slice(data)))
    }

    /// Wraps content that is known to fit.
    pub(crate) fn from_bytes_unchecked(data: Bytes) -> Self {
        debug_assert!(data.len() <= Self::MAX_LEN);
        Self(data)
    }

    /// Returns the number of content octets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there is no content.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the content (without the length prefix).
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the string and returns its content.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Returns the length prefix that precedes the content on the wire.
    pub fn prefix(&self) -> Uint32 {
        // Construction guarantees the length fits.
        Uint32::new(self.0.len() as u32)
    }
}

/// Reads a length prefix and checks it against `range` before any content is consumed.
pub(crate) fn read_len(buf: &mut impl Buf, range: &RangeCfg<usize>) -> Result<usize, Error> {
    let len = Uint32::read(buf)?.get() as usize;
    check_len(len, range)?;
    Ok(len)
}

fn check_len(len: usize, range: &RangeCfg<usize>) -> Result<(), Error> {
    if !range.contains(&len) {
        debug!(len, "string length outside configured range");
        return Err(Error::InvalidLength(len));
    }
    Ok(())
}

impl TryFrom<Bytes> for ByteString {
    type Error = Error;

    fn try_from(data: Bytes) -> Result<Self, Self::Error> {
        length_prefix(data.len())?;
        Ok(Self(data))
    }
}

impl TryFrom<Vec<u8>> for ByteString {
    type Error = Error;

    fn try_from(data: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(Bytes::from(data))
    }
}

impl TryFrom<&[u8]> for ByteString {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::copy_from_slice(data)
    }
}

impl TryFrom<String> for ByteString {
    type Error = Error;

    fn try_from(data: String) -> Result<Self, Self::Error> {
        Self::try_from(Bytes::from(data))
    }
}

impl TryFrom<&str> for ByteString {
    type Error = Error;

    fn try_from(data: &str) -> Result<Self, Self::Error> {
        Self::copy_from_slice(data.as_bytes())
    }
}

impl From<ByteString> for Bytes {
    fn from(value: ByteString) -> Self {
        value.0
    }
}

impl TryFrom<ByteString> for String {
    type Error = Error;

    fn try_from(value: ByteString) -> Result<Self, Self::Error> {
        String::from_utf8(value.0.to_vec())
            .map_err(|err| Error::InvalidData("ByteString".into(), err.to_string()))
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl Write for ByteString {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.prefix().write(buf);
        buf.put_slice(&self.0);
    }
}

impl EncodeSize for ByteString {
    #[inline]
    fn encode_size(&self) -> usize {
        Uint32::SIZE + self.0.len()
    }
}

impl Read for ByteString {
    type Cfg = RangeCfg<usize>;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &Self::Cfg) -> Result<Self, Error> {
        let len = read_len(buf, range)?;
        at_least(buf, len)?;
        Ok(Self(buf.copy_to_bytes(len)))
    }
}
