use bytes::Bytes;
use thiserror::Error;

/// Errors produced by [`decode`](crate::decode).
///
/// Decoding is all-or-nothing: on failure no partial value is returned, and
/// the error describes the first offending construct in the input.
#[derive(Debug, Error)]
pub enum BencodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unexpected byte 0x{0:02x}")]
    UnexpectedByte(u8),

    #[error("invalid string length")]
    InvalidLength,

    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    #[error("duplicate dictionary key: {0:?}")]
    DuplicateKey(Bytes),

    #[error("dictionary key is not a byte string")]
    NonStringKey,

    #[error("trailing data after value")]
    TrailingData,

    #[error("nesting too deep")]
    NestingTooDeep,
}
