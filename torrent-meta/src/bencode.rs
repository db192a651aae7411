use std::collections::HashMap;

use bstr::ByteSlice;

use crate::error::TorrentMetaError;

/// A single decoded bencode value.
///
/// Byte strings are kept as raw bytes: in torrent metadata they carry
/// UTF-8 text for names and path segments, but the format itself does
/// not guarantee it (piece hashes are byte strings too).
#[derive(Debug, Clone, PartialEq)]
pub enum BencodeValue {
    String(Vec<u8>),
    Integer(i64),
    List(Vec<BencodeValue>),
    Dict(HashMap<String, BencodeValue>),
}

impl BencodeValue {
    pub fn field_type(&self) -> String {
        match self {
            BencodeValue::String(_) => "String".to_string(),
            BencodeValue::Integer(_) => "Integer".to_string(),
            BencodeValue::List(_) => "List".to_string(),
            BencodeValue::Dict(_) => "Dict".to_string(),
        }
    }
}

/// Decodes exactly one bencode value from the start of `data`.
///
/// Bytes after the value are ignored; a torrent file is a single root
/// dictionary, so there is nothing meaningful past it.
pub fn decode(data: &[u8]) -> Result<BencodeValue, TorrentMetaError> {
    let mut pos = 0;
    decode_value(data, &mut pos)
}

fn peek(data: &[u8], pos: usize) -> Option<u8> {
    data.get(pos).copied()
}

fn decode_value(data: &[u8], pos: &mut usize) -> Result<BencodeValue, TorrentMetaError> {
    match peek(data, *pos) {
        None => Err(TorrentMetaError::InvalidStructure(
            "Expected value, found end of input".to_string(),
        )),
        Some(c) if c.is_ascii_digit() => decode_string(data, pos),
        Some(b'i') => decode_integer(data, pos),
        Some(b'l') => decode_list(data, pos),
        Some(b'd') => decode_dict(data, pos),
        Some(c) => Err(TorrentMetaError::UnknownSpecifier(c)),
    }
}

fn decode_string(data: &[u8], pos: &mut usize) -> Result<BencodeValue, TorrentMetaError> {
    let start = *pos;
    while peek(data, *pos).is_some_and(|c| c.is_ascii_digit()) {
        *pos += 1;
    }

    match peek(data, *pos) {
        Some(b':') => *pos += 1,
        Some(_) => {
            return Err(TorrentMetaError::InvalidStructure(format!(
                "Expected colon after string length {}",
                data[start..*pos].as_bstr()
            )))
        }
        None => {
            return Err(TorrentMetaError::InvalidStructure(
                "Unexpected end for string length".to_string(),
            ))
        }
    }

    let length = String::from_utf8(data[start..*pos - 1].to_vec())?.parse::<usize>()?;
    let remaining = data.len() - *pos;
    if remaining < length {
        return Err(TorrentMetaError::InvalidStructure(format!(
            "Unexpected end for string, expected length {}, got {}",
            length, remaining
        )));
    }

    let field = data[*pos..*pos + length].to_vec();
    *pos += length;
    Ok(BencodeValue::String(field))
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<BencodeValue, TorrentMetaError> {
    // skip the leading 'i'
    *pos += 1;

    let start = *pos;
    while peek(data, *pos).is_some_and(|c| c != b'e') {
        *pos += 1;
    }
    if peek(data, *pos).is_none() {
        return Err(TorrentMetaError::InvalidStructure(
            "Unexpected end for integer".to_string(),
        ));
    }

    let text = &data[start..*pos];
    *pos += 1;

    // bencode integers are canonical: no '+', no '-0', no leading zeros
    let digits = text.strip_prefix(b"-").unwrap_or(text);
    let leading_zero = digits.len() > 1 && digits.first() == Some(&b'0');
    if text.first() == Some(&b'+') || leading_zero || (digits == b"0" && digits.len() != text.len())
    {
        return Err(TorrentMetaError::InvalidStructure(format!(
            "Malformed integer {}",
            text.as_bstr()
        )));
    }

    let value = String::from_utf8(text.to_vec())?.parse::<i64>()?;
    Ok(BencodeValue::Integer(value))
}

fn decode_list(data: &[u8], pos: &mut usize) -> Result<BencodeValue, TorrentMetaError> {
    // skip the leading 'l'
    *pos += 1;

    let mut list = Vec::new();
    loop {
        match peek(data, *pos) {
            None => {
                return Err(TorrentMetaError::InvalidStructure(
                    "Unexpected end for list".to_string(),
                ))
            }
            Some(b'e') => {
                *pos += 1;
                break;
            }
            Some(_) => list.push(decode_value(data, pos)?),
        }
    }
    Ok(BencodeValue::List(list))
}

fn decode_dict(data: &[u8], pos: &mut usize) -> Result<BencodeValue, TorrentMetaError> {
    // skip the leading 'd'
    *pos += 1;

    let mut dict = HashMap::new();
    loop {
        match peek(data, *pos) {
            None => {
                return Err(TorrentMetaError::InvalidStructure(
                    "Unexpected end for dict".to_string(),
                ))
            }
            Some(b'e') => {
                *pos += 1;
                break;
            }
            Some(_) => {
                let key = match decode_value(data, pos)? {
                    BencodeValue::String(key) => String::from_utf8(key)?,
                    other => {
                        return Err(TorrentMetaError::FieldTypeError {
                            expected: "String".to_string(),
                            found: other.field_type(),
                        })
                    }
                };
                let value = decode_value(data, pos)?;
                // duplicate keys overwrite: torrents in the wild are
                // not always canonically encoded
                dict.insert(key, value);
            }
        }
    }
    Ok(BencodeValue::Dict(dict))
}
