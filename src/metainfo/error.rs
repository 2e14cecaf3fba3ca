use thiserror::Error;

use crate::bencode::{BencodeError, TypeMismatch};

/// Errors that can occur when parsing torrent files.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The torrent file contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// A required field is missing from the torrent file.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field has an invalid value.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// A field holds a different bencode type than the format requires.
    #[error("field {0}: {1}")]
    WrongType(&'static str, TypeMismatch),

    /// The info hash has an invalid length (must be 20 bytes).
    #[error("invalid info hash length")]
    InvalidInfoHashLength,

    /// An I/O error occurred while reading the torrent file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
