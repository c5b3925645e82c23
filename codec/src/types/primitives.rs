//! Codec implementations for the fixed-size RFC 4251 primitives.
//!
//! Every type here keeps its value in wire order and converts on access, so the bytes that are
//! compared, hashed, and written are exactly the bytes that appear on the wire.
//!
//! | Type        | Size | Wire form                       |
//! |-------------|------|---------------------------------|
//! | [`Byte`]    | 1    | the octet itself                |
//! | [`Boolean`] | 1    | `0x00` or `0x01` (any nonzero decodes as true) |
//! | [`Uint32`]  | 4    | big-endian                      |
//! | [`Uint64`]  | 8    | big-endian                      |

use crate::{util::at_least, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};

/// An arbitrary 8-bit value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Byte(u8);

impl Byte {
    /// Wraps an octet.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the octet.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Byte {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Byte> for u8 {
    fn from(value: Byte) -> Self {
        value.0
    }
}

impl Write for Byte {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.0);
    }
}

impl Read for Byte {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        at_least(buf, Self::SIZE)?;
        Ok(Self(buf.get_u8()))
    }
}

impl FixedSize for Byte {
    const SIZE: usize = 1;
}

/// A truth value.
///
/// Any nonzero octet decodes as `true`; encoding always produces `0x00` or `0x01`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Boolean(bool);

impl Boolean {
    /// Wraps a truth value.
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Returns the truth value.
    pub const fn get(self) -> bool {
        self.0
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Boolean> for bool {
    fn from(value: Boolean) -> Self {
        value.0
    }
}

impl Write for Boolean {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(u8::from(self.0));
    }
}

impl Read for Boolean {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        Ok(Self(Byte::read(buf)?.get() != 0))
    }
}

impl FixedSize for Boolean {
    const SIZE: usize = 1;
}

/// A 32-bit unsigned integer, stored most significant byte first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint32([u8; 4]);

impl Uint32 {
    /// Stores `value` in wire order.
    pub const fn new(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    /// Converts the stored bytes back to a `u32`.
    pub const fn get(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Returns the value in wire order.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<u32> for Uint32 {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Uint32> for u32 {
    fn from(value: Uint32) -> Self {
        value.get()
    }
}

/// A 64-bit unsigned integer, stored most significant byte first.
///
/// Conversions shift one byte at a time, so the result never depends on host byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint64([u8; 8]);

impl Uint64 {
    /// Stores `value` in wire order.
    pub fn new(value: u64) -> Self {
        let mut buf = [0u8; 8];
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = (value >> (8 * (7 - i))) as u8;
        }
        Self(buf)
    }

    /// Converts the stored bytes back to a `u64`.
    pub fn get(self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
    }

    /// Returns the value in wire order.
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl From<u64> for Uint64 {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Uint64> for u64 {
    fn from(value: Uint64) -> Self {
        value.get()
    }
}

// Wire-order integers are copied to and from the buffer untouched.
macro_rules! impl_wire_order {
    ($type:ty, $size:expr) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                self.0.write(buf);
            }
        }

        impl Read for $type {
            type Cfg = ();

            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
                <[u8; $size]>::read(buf).map(Self)
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = $size;
        }
    };
}

impl_wire_order!(Uint32, 4);
impl_wire_order!(Uint64, 8);

// Constant-size array implementation
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self[..]);
    }
}

impl<const N: usize> Read for [u8; N] {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        at_least(buf, N)?;
        let mut dst = [0; N];
        buf.copy_to_slice(&mut dst);
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = N;
}
