//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, most notably `.torrent` files.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use rbenc::bencode::{decode, decode_at, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//!
//! // Decode a value embedded in a larger buffer
//! let (value, next) = decode_at(b"4:spami42ee", 0).unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//! assert_eq!(next, 6);
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use rbenc::bencode::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! // Encode an integer
//! assert_eq!(encode(&Value::Integer(42)), b"i42e");
//!
//! // Encode a string
//! assert_eq!(encode(&Value::string("hello")), b"5:hello");
//!
//! // Encode a list
//! let list = Value::List(vec![
//!     Value::Integer(1),
//!     Value::Integer(2),
//! ]);
//! assert_eq!(encode(&list), b"li1ei2ee");
//!
//! // Encode a dictionary (keys come out sorted)
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"key"), Value::string("value"));
//! assert_eq!(encode(&Value::Dict(dict)), b"d3:key5:valuee");
//! ```
//!
//! # Error Handling
//!
//! Decoding can fail for various reasons:
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended before a value completed
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::InvalidLeadByte`] - A byte that starts no bencode production
//! - [`BencodeError::TruncatedString`] - Declared string length exceeds the input
//! - [`BencodeError::UnterminatedCollection`] - Missing `e` terminator
//! - [`BencodeError::DuplicateKey`] - A dictionary key appeared twice
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded (max 64 levels)
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! Encoding is total: every [`Value`] has exactly one canonical encoding, so
//! [`encode`] returns plain bytes with no error path.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_at};
pub use encode::{encode, encode_into};
pub use error::BencodeError;
pub use value::{TypeMismatch, Value, ValueKind};
