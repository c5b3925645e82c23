//! Error types for codec operations

use std::io;
use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("truncated input")]
    TruncatedInput,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("length limit exceeded: {0} > {max}", max = u32::MAX)]
    LengthLimitExceeded(usize),
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("invalid data in {0}: {1}")]
    InvalidData(String, String), // context, message
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        // A stream that ends early is indistinguishable from a short buffer.
        if err.kind() == io::ErrorKind::UnexpectedEof {
            return Error::TruncatedInput;
        }
        Error::Io(err)
    }
}
