//! Helpers shared by the codec implementations.

use crate::Error;
use bytes::Buf;

// Every `uint32` length prefix must be representable as an in-memory length.
const _: () = assert!(usize::BITS >= u32::BITS);

/// Returns an error if the buffer holds fewer than `len` bytes.
#[inline]
pub fn at_least<B: Buf>(buf: &mut B, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::TruncatedInput);
    }
    Ok(())
}

/// Converts an in-memory length into a `uint32` length prefix.
#[inline]
pub fn length_prefix(len: usize) -> Result<u32, Error> {
    u32::try_from(len).map_err(|_| Error::LengthLimitExceeded(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least() {
        let mut buf: &[u8] = &[1, 2, 3];
        assert!(at_least(&mut buf, 0).is_ok());
        assert!(at_least(&mut buf, 3).is_ok());
        assert!(matches!(at_least(&mut buf, 4), Err(Error::TruncatedInput)));
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_length_prefix() {
        assert_eq!(length_prefix(0).unwrap(), 0);
        assert_eq!(length_prefix(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_length_prefix_limit() {
        let len = u32::MAX as usize + 1;
        assert!(matches!(
            length_prefix(len),
            Err(Error::LengthLimitExceeded(l)) if l == len
        ));
    }
}
