//! The RFC 4251 `name-list`: names joined by commas, carried as the content of a `string`.
//!
//! Names must be non-empty US-ASCII and must not contain a comma. These rules are enforced in
//! each direction, so a [`NameList`] always round-trips to the same sequence of names in the same
//! order. An empty list is the empty string.

use crate::{
    types::string::read_len, util::at_least, ByteString, EncodeSize, Error, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut, Bytes};

const SEPARATOR: &str = ",";

/// An ordered list of names together with its comma-joined content.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameList {
    names: Vec<String>,
    content: ByteString,
}

impl NameList {
    /// Validates `names` and joins them.
    ///
    /// Fails with [`Error::InvalidData`] if any name is empty, is not ASCII, or contains a comma,
    /// and with
    /// [`Error::LengthLimitExceeded`] if the joined content does not fit in a `string`.
    pub fn new<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        for name in &names {
            validate(name)?;
        }
        let content = ByteString::try_from(names.join(SEPARATOR))?;
        Ok(Self { names, content })
    }

    /// Splits comma-joined `content` into names.
    pub fn from_content(content: ByteString) -> Result<Self, Error> {
        let joined = std::str::from_utf8(content.as_bytes())
            .map_err(|err| Error::InvalidData("NameList".into(), err.to_string()))?;
        let names = if joined.is_empty() {
            Vec::new()
        } else {
            joined
                .split(SEPARATOR)
                .map(|name| validate(name).map(|_| name.to_string()))
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(Self { names, content })
    }

    /// Returns the names in wire order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consumes the list and returns its names.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// Iterates over the names in wire order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the list holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns true if `name` is one of the names.
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|candidate| candidate == name)
    }

    /// Returns the comma-joined content (without the length prefix).
    pub fn content(&self) -> &ByteString {
        &self.content
    }
}

fn validate(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::InvalidData("NameList".into(), "empty name".into()));
    }
    if !name.is_ascii() {
        return Err(Error::InvalidData(
            "NameList".into(),
            format!("name is not ascii: {name:?}"),
        ));
    }
    if name.contains(SEPARATOR) {
        return Err(Error::InvalidData(
            "NameList".into(),
            format!("name contains separator: {name:?}"),
        ));
    }
    Ok(())
}

impl TryFrom<Vec<String>> for NameList {
    type Error = Error;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl TryFrom<&[&str]> for NameList {
    type Error = Error;

    fn try_from(names: &[&str]) -> Result<Self, Self::Error> {
        Self::new(names.iter().copied())
    }
}

impl TryFrom<ByteString> for NameList {
    type Error = Error;

    fn try_from(content: ByteString) -> Result<Self, Self::Error> {
        Self::from_content(content)
    }
}

impl From<NameList> for ByteString {
    fn from(list: NameList) -> Self {
        list.content
    }
}

impl From<NameList> for Vec<String> {
    fn from(list: NameList) -> Self {
        list.names
    }
}

impl Write for NameList {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.content.write(buf);
    }
}

impl EncodeSize for NameList {
    #[inline]
    fn encode_size(&self) -> usize {
        self.content.encode_size()
    }
}

impl Read for NameList {
    type Cfg = RangeCfg<usize>;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &Self::Cfg) -> Result<Self, Error> {
        let len = read_len(buf, range)?;
        at_least(buf, len)?;
        let content: Bytes = buf.copy_to_bytes(len);
        Self::from_content(ByteString::from_bytes_unchecked(content))
    }
}
