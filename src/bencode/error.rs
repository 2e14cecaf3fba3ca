use thiserror::Error;

/// Errors produced while decoding bencode data.
///
/// Decoding is fail-fast: the first malformed byte aborts the whole decode
/// and no partial value is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BencodeError {
    /// Input ended before the current value was complete.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The byte at the current position starts no bencode production.
    #[error("invalid lead byte: 0x{0:02x}")]
    InvalidLeadByte(u8),

    /// Malformed integer body (empty, non-digit, leading zeros, `-0`, or
    /// out of `i64` range).
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// The length prefix of a byte string is not a valid decimal number.
    #[error("invalid string length prefix")]
    InvalidLengthPrefix,

    /// A byte string declared more bytes than the input contains.
    #[error("truncated string")]
    TruncatedString,

    /// A list, dictionary, or integer is missing its `e` terminator.
    #[error("unterminated collection")]
    UnterminatedCollection,

    /// A dictionary key did not decode as a byte string.
    #[error("dictionary key is not a string")]
    NonStringKey,

    /// The same key appeared twice in one dictionary.
    #[error("duplicate dictionary key: {0}")]
    DuplicateKey(String),

    /// Nesting exceeded the recursion limit.
    #[error("nesting too deep")]
    NestingTooDeep,

    /// Extra bytes remained after the top-level value.
    #[error("trailing data after value")]
    TrailingData,
}
