use std::collections::BTreeMap;
use std::io::Write;

use bytes::Bytes;

use super::*;
use crate::bencode::{encode, BencodeError, Value};

fn info_dict(name: &str, extra: impl FnOnce(&mut BTreeMap<Bytes, Value>)) -> Value {
    let mut info = BTreeMap::new();
    info.insert(Bytes::from_static(b"name"), Value::string(name));
    info.insert(Bytes::from_static(b"piece length"), Value::Integer(32768));
    info.insert(
        Bytes::from_static(b"pieces"),
        Value::Bytes(Bytes::from(vec![0u8; 60])),
    );
    extra(&mut info);
    Value::Dict(info)
}

fn single_file_torrent() -> Vec<u8> {
    let info = info_dict("sample.txt", |info| {
        info.insert(Bytes::from_static(b"length"), Value::Integer(92063));
    });

    let mut root = BTreeMap::new();
    root.insert(
        Bytes::from_static(b"announce"),
        Value::string("http://tracker.example.com/announce"),
    );
    root.insert(Bytes::from_static(b"comment"), Value::string("test torrent"));
    root.insert(Bytes::from_static(b"info"), info);
    encode(&Value::Dict(root))
}

fn multi_file_torrent() -> Vec<u8> {
    let info = info_dict("release", |info| {
        let file = |len: i64, parts: &[&str]| {
            let mut d = BTreeMap::new();
            d.insert(Bytes::from_static(b"length"), Value::Integer(len));
            d.insert(
                Bytes::from_static(b"path"),
                Value::List(parts.iter().map(|p| Value::string(p)).collect()),
            );
            Value::Dict(d)
        };
        info.insert(
            Bytes::from_static(b"files"),
            Value::List(vec![
                file(100, &["a.txt"]),
                file(200, &["sub", "b.txt"]),
            ]),
        );
    });

    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"info"), info);
    encode(&Value::Dict(root))
}

#[test]
fn test_parse_single_file() {
    let metainfo = Metainfo::from_bytes(&single_file_torrent()).unwrap();

    assert_eq!(metainfo.info.name, "sample.txt");
    assert_eq!(
        metainfo.announce.as_deref(),
        Some("http://tracker.example.com/announce")
    );
    assert_eq!(metainfo.comment.as_deref(), Some("test torrent"));
    assert_eq!(metainfo.info.total_length, 92063);
    assert_eq!(metainfo.info.piece_length, 32768);
    assert_eq!(metainfo.info.piece_count(), 3);
    assert!(metainfo.info.is_single_file());
    assert_eq!(metainfo.info.files[0].path, std::path::Path::new("sample.txt"));
    assert_eq!(metainfo.info.files[0].length, 92063);
    assert_eq!(metainfo.info.files[0].offset, 0);
}

#[test]
fn test_parse_multi_file() {
    let metainfo = Metainfo::from_bytes(&multi_file_torrent()).unwrap();

    assert_eq!(metainfo.info.name, "release");
    assert!(metainfo.announce.is_none());
    assert!(!metainfo.info.is_single_file());
    assert_eq!(metainfo.info.total_length, 300);

    let files = &metainfo.info.files;
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, std::path::Path::new("release/a.txt"));
    assert_eq!(files[0].offset, 0);
    assert_eq!(files[1].path, std::path::Path::new("release/sub/b.txt"));
    assert_eq!(files[1].offset, 100);
}

#[test]
fn test_raw_info_and_hash() {
    let metainfo = Metainfo::from_bytes(&single_file_torrent()).unwrap();

    // raw_info is the exact re-encoding of the info dict, and the hash is
    // SHA-1 over those bytes
    let decoded = crate::bencode::decode(&single_file_torrent()).unwrap();
    let expected_raw = encode(decoded.get(b"info").unwrap());
    assert_eq!(metainfo.raw_info().as_ref(), expected_raw.as_slice());
    assert_eq!(
        metainfo.info_hash,
        InfoHash::from_info_bytes(&expected_raw)
    );
}

#[test]
fn test_missing_info() {
    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"announce"), Value::string("http://t"));
    let data = encode(&Value::Dict(root));

    assert!(matches!(
        Metainfo::from_bytes(&data).unwrap_err(),
        MetainfoError::MissingField("info")
    ));
}

#[test]
fn test_root_not_a_dict() {
    let data = encode(&Value::Integer(42));
    assert!(matches!(
        Metainfo::from_bytes(&data).unwrap_err(),
        MetainfoError::WrongType("root", _)
    ));
}

#[test]
fn test_info_wrong_type() {
    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"info"), Value::Integer(1));
    let data = encode(&Value::Dict(root));

    assert!(matches!(
        Metainfo::from_bytes(&data).unwrap_err(),
        MetainfoError::WrongType("info", _)
    ));
}

#[test]
fn test_missing_name() {
    let mut info = BTreeMap::new();
    info.insert(Bytes::from_static(b"piece length"), Value::Integer(32768));
    info.insert(
        Bytes::from_static(b"pieces"),
        Value::Bytes(Bytes::from(vec![0u8; 20])),
    );
    info.insert(Bytes::from_static(b"length"), Value::Integer(1));
    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"info"), Value::Dict(info));
    let data = encode(&Value::Dict(root));

    assert!(matches!(
        Metainfo::from_bytes(&data).unwrap_err(),
        MetainfoError::MissingField("name")
    ));
}

#[test]
fn test_pieces_not_multiple_of_20() {
    let info = info_dict("x", |info| {
        info.insert(
            Bytes::from_static(b"pieces"),
            Value::Bytes(Bytes::from(vec![0u8; 21])),
        );
        info.insert(Bytes::from_static(b"length"), Value::Integer(1));
    });
    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"info"), info);
    let data = encode(&Value::Dict(root));

    assert!(matches!(
        Metainfo::from_bytes(&data).unwrap_err(),
        MetainfoError::InvalidField("pieces")
    ));
}

#[test]
fn test_piece_length_wrong_type() {
    let info = info_dict("x", |info| {
        info.insert(Bytes::from_static(b"piece length"), Value::string("big"));
        info.insert(Bytes::from_static(b"length"), Value::Integer(1));
    });
    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"info"), info);
    let data = encode(&Value::Dict(root));

    assert!(matches!(
        Metainfo::from_bytes(&data).unwrap_err(),
        MetainfoError::WrongType("piece length", _)
    ));
}

#[test]
fn test_negative_length_rejected() {
    let info = info_dict("x", |info| {
        info.insert(Bytes::from_static(b"length"), Value::Integer(-5));
    });
    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"info"), info);
    let data = encode(&Value::Dict(root));

    assert!(matches!(
        Metainfo::from_bytes(&data).unwrap_err(),
        MetainfoError::InvalidField("length")
    ));
}

#[test]
fn test_missing_length_and_files() {
    let info = info_dict("x", |_| {});
    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"info"), info);
    let data = encode(&Value::Dict(root));

    assert!(matches!(
        Metainfo::from_bytes(&data).unwrap_err(),
        MetainfoError::MissingField("length or files")
    ));
}

#[test]
fn test_invalid_bencode() {
    assert!(matches!(
        Metainfo::from_bytes(b"not bencode").unwrap_err(),
        MetainfoError::Bencode(BencodeError::InvalidLeadByte(b'n'))
    ));
}

#[test]
fn test_from_file() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&single_file_torrent()).unwrap();
    tmp.flush().unwrap();

    let metainfo = Metainfo::from_file(tmp.path()).unwrap();
    assert_eq!(metainfo.info.name, "sample.txt");
    assert_eq!(metainfo.info.total_length, 92063);
}

#[test]
fn test_from_file_missing() {
    assert!(matches!(
        Metainfo::from_file("/nonexistent/file.torrent").unwrap_err(),
        MetainfoError::Io(_)
    ));
}

#[test]
fn test_info_hash_hex_roundtrip() {
    let hex = "0123456789abcdef0123456789abcdef01234567";
    let hash = InfoHash::from_hex(hex).unwrap();
    assert_eq!(hash.to_hex(), hex);
    assert_eq!(hash.to_string(), hex);
}

#[test]
fn test_info_hash_bad_input() {
    assert!(matches!(
        InfoHash::from_hex("0123").unwrap_err(),
        MetainfoError::InvalidInfoHashLength
    ));
    assert!(matches!(
        InfoHash::from_hex("zz23456789abcdef0123456789abcdef01234567").unwrap_err(),
        MetainfoError::InvalidInfoHashLength
    ));
    assert!(matches!(
        InfoHash::from_bytes(&[0u8; 19]).unwrap_err(),
        MetainfoError::InvalidInfoHashLength
    ));
}
