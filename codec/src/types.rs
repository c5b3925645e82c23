//! Implementations of Codec for the RFC 4251 data types.

pub mod mpint;
pub mod name_list;
pub mod primitives;
pub mod string;
