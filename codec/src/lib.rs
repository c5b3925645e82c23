//! Encode and decode the RFC 4251 wire primitives.
//!
//! # Overview
//!
//! SSH-family protocols build every message from a handful of data types defined in
//! [RFC 4251, section 5](https://www.rfc-editor.org/rfc/rfc4251#section-5). This crate provides
//! each of them as a value type that can be:
//! - written to a [`bytes::BufMut`] or a [`std::io::Write`], producing exactly its wire form
//! - read from a [`bytes::Buf`] or a [`std::io::Read`], consuming exactly its wire form
//! - converted to and from its natural in-memory representation
//!
//! # Supported Types
//!
//! | RFC 4251    | Type            | In-memory                    |
//! |-------------|-----------------|------------------------------|
//! | `byte`      | [`Byte`]        | `u8`                         |
//! | `boolean`   | [`Boolean`]     | `bool`                       |
//! | `uint32`    | [`Uint32`]      | `u32`                        |
//! | `uint64`    | [`Uint64`]      | `u64`                        |
//! | `string`    | [`ByteString`]  | [`bytes::Bytes`]             |
//! | `mpint`     | [`Mpint`]       | [`num_bigint::BigInt`]       |
//! | `name-list` | [`NameList`]    | `Vec<String>`                |
//!
//! All multi-byte integers are big-endian. A `string` is a `uint32` length followed by that many
//! octets; `mpint` and `name-list` are strings with constrained content.
//!
//! Messages are composed by implementing [`Write`], [`EncodeSize`], and [`Read`] in terms of
//! these types.
//!
//! # Example
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use num_bigint::BigInt;
//! use rfc4251_codec::{
//!     Byte, ByteString, DecodeExt, Encode, EncodeSize, Error, Mpint, Read, ReadExt, Write,
//! };
//!
//! // An RSA public key blob: string "ssh-rsa", mpint e, mpint n.
//! #[derive(Debug, Clone, PartialEq)]
//! struct RsaPublicKey {
//!     e: Mpint,
//!     n: Mpint,
//! }
//!
//! impl Write for RsaPublicKey {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         ByteString::try_from("ssh-rsa").unwrap().write(buf);
//!         self.e.write(buf);
//!         self.n.write(buf);
//!     }
//! }
//!
//! impl EncodeSize for RsaPublicKey {
//!     fn encode_size(&self) -> usize {
//!         (4 + "ssh-rsa".len()) + self.e.encode_size() + self.n.encode_size()
//!     }
//! }
//!
//! impl Read for RsaPublicKey {
//!     type Cfg = ();
//!
//!     fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
//!         let kind = ByteString::read(buf)?;
//!         if kind.as_bytes() != b"ssh-rsa" {
//!             return Err(Error::InvalidData("RsaPublicKey".into(), "unexpected key type".into()));
//!         }
//!         let e = Mpint::read(buf)?;
//!         let n = Mpint::read(buf)?;
//!         Ok(Self { e, n })
//!     }
//! }
//!
//! let key = RsaPublicKey {
//!     e: Mpint::new(BigInt::from(65537)).unwrap(),
//!     n: Mpint::new(BigInt::from(0xC5u8) << 1016u32).unwrap(),
//! };
//! let encoded = key.encode();
//! assert_eq!(encoded.len(), key.encode_size());
//! assert_eq!(RsaPublicKey::decode(encoded).unwrap(), key);
//!
//! // Single octets need no framing.
//! assert_eq!(Byte::new(11).encode(), &[11u8][..]);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod io;
pub mod types;
pub mod util;

// Re-export main types and traits
pub use codec::{Codec, Decode, DecodeExt, Encode, EncodeSize, FixedSize, Read, ReadExt, Write};
pub use config::RangeCfg;
pub use error::Error;
pub use io::{ReadFrom, WriteTo};
pub use types::{
    mpint::Mpint,
    name_list::NameList,
    primitives::{Boolean, Byte, Uint32, Uint64},
    string::ByteString,
};
