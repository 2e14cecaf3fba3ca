use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

const MAX_DEPTH: usize = 64;

/// Decodes a single bencode value spanning the entire input.
///
/// Fails with [`BencodeError::TrailingData`] if bytes remain after the value.
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let (value, pos) = parse_value(data, 0, 0)?;

    if pos != data.len() {
        return Err(BencodeError::TrailingData);
    }

    Ok(value)
}

/// Decodes one bencode value starting at `offset`.
///
/// Returns the value together with the offset of the first byte after it,
/// for callers working through a buffer that holds more than one value.
pub fn decode_at(data: &[u8], offset: usize) -> Result<(Value, usize), BencodeError> {
    parse_value(data, offset, 0)
}

fn parse_value(data: &[u8], pos: usize, depth: usize) -> Result<(Value, usize), BencodeError> {
    if depth >= MAX_DEPTH {
        return Err(BencodeError::NestingTooDeep);
    }

    match data.get(pos).copied() {
        None => Err(BencodeError::UnexpectedEof),
        Some(b'i') => parse_integer(data, pos),
        Some(b'l') => parse_list(data, pos, depth),
        Some(b'd') => parse_dict(data, pos, depth),
        Some(b'0'..=b'9') => parse_bytes(data, pos),
        Some(c) => Err(BencodeError::InvalidLeadByte(c)),
    }
}

fn parse_integer(data: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
    let start = pos + 1;
    let mut end = start;
    while end < data.len() && data[end] != b'e' {
        end += 1;
    }

    if end == data.len() {
        return Err(BencodeError::UnterminatedCollection);
    }

    let text = std::str::from_utf8(&data[start..end])
        .map_err(|_| BencodeError::InvalidInteger("invalid utf8".into()))?;

    if text.is_empty() {
        return Err(BencodeError::InvalidInteger("empty".into()));
    }

    if text.starts_with("-0") || (text.starts_with('0') && text.len() > 1) {
        return Err(BencodeError::InvalidInteger("leading zeros".into()));
    }

    let value: i64 = text
        .parse()
        .map_err(|_| BencodeError::InvalidInteger(text.into()))?;

    Ok((Value::Integer(value), end + 1))
}

fn parse_bytes(data: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
    let mut colon = pos;
    while colon < data.len() && data[colon] != b':' {
        colon += 1;
    }

    if colon == data.len() {
        return Err(BencodeError::UnexpectedEof);
    }

    let len_text =
        std::str::from_utf8(&data[pos..colon]).map_err(|_| BencodeError::InvalidLengthPrefix)?;

    let len: usize = len_text
        .parse()
        .map_err(|_| BencodeError::InvalidLengthPrefix)?;

    let start = colon + 1;
    let end = start
        .checked_add(len)
        .ok_or(BencodeError::TruncatedString)?;

    if end > data.len() {
        return Err(BencodeError::TruncatedString);
    }

    let bytes = Bytes::copy_from_slice(&data[start..end]);
    Ok((Value::Bytes(bytes), end))
}

fn parse_list(data: &[u8], pos: usize, depth: usize) -> Result<(Value, usize), BencodeError> {
    let mut pos = pos + 1;
    let mut items = Vec::new();

    loop {
        match data.get(pos).copied() {
            None => return Err(BencodeError::UnterminatedCollection),
            Some(b'e') => return Ok((Value::List(items), pos + 1)),
            Some(_) => {
                let (item, next) = parse_value(data, pos, depth + 1)?;
                items.push(item);
                pos = next;
            }
        }
    }
}

fn parse_dict(data: &[u8], pos: usize, depth: usize) -> Result<(Value, usize), BencodeError> {
    let mut pos = pos + 1;
    let mut entries = BTreeMap::new();

    loop {
        match data.get(pos).copied() {
            None => return Err(BencodeError::UnterminatedCollection),
            Some(b'e') => return Ok((Value::Dict(entries), pos + 1)),
            Some(_) => {
                let (key, next) = match parse_value(data, pos, depth + 1)? {
                    (Value::Bytes(b), next) => (b, next),
                    _ => return Err(BencodeError::NonStringKey),
                };

                let (value, next) = parse_value(data, next, depth + 1)?;

                if entries.contains_key(&key) {
                    return Err(BencodeError::DuplicateKey(
                        String::from_utf8_lossy(&key).into_owned(),
                    ));
                }

                entries.insert(key, value);
                pos = next;
            }
        }
    }
}
