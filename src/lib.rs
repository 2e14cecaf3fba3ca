//! rbenc - Bencode encoding/decoding and torrent metadata parsing
//!
//! This library implements the bencode serialization format ([BEP-3]) used
//! by `.torrent` files, together with a typed reader for the metadata those
//! files carry.
//!
//! # Modules
//!
//! - [`bencode`] - Bencode value model, decoder, and encoder
//! - [`metainfo`] - Torrent metainfo extracted from decoded bencode
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod bencode;
pub mod metainfo;

pub use bencode::{
    decode, decode_at, encode, encode_into, BencodeError, TypeMismatch, Value, ValueKind,
};
pub use metainfo::{File, Info, InfoHash, Metainfo, MetainfoError};
