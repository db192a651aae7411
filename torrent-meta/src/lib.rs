use std::path::Path;

use bencode::{decode, BencodeValue};
use error::TorrentMetaError;
use model::TorrentMetadata;

pub mod bencode;
pub mod error;
pub mod model;

pub fn parse_torrent_metadata(bencoded: &[u8]) -> Result<TorrentMetadata, TorrentMetaError> {
    let parsed = decode(bencoded)?;

    // the root element should be a dictionary
    let dict = match parsed {
        BencodeValue::Dict(dict) => dict,
        other => {
            return Err(TorrentMetaError::FieldTypeError {
                expected: "Dict".to_string(),
                found: other.field_type(),
            })
        }
    };

    // read info
    let info = match dict.get("info") {
        Some(BencodeValue::Dict(info)) => info,
        None => return Err(TorrentMetaError::MissingRequiredField("info".to_string())),
        Some(other) => {
            return Err(TorrentMetaError::FieldTypeError {
                expected: "Dict".to_string(),
                found: other.field_type(),
            })
        }
    };

    // read name
    let name = match info.get("name") {
        Some(BencodeValue::String(name)) => String::from_utf8(name.clone())?,
        None => return Err(TorrentMetaError::MissingRequiredField("name".to_string())),
        Some(other) => {
            return Err(TorrentMetaError::FieldTypeError {
                expected: "String".to_string(),
                found: other.field_type(),
            })
        }
    };

    // read files, joining each entry's path segments with '/'
    let files = match info.get("files") {
        Some(BencodeValue::List(files)) => files
            .iter()
            .map(|file| match file {
                BencodeValue::Dict(file) => {
                    let segments = match file.get("path") {
                        Some(BencodeValue::List(path)) => path
                            .iter()
                            .map(|segment| match segment {
                                BencodeValue::String(segment) => {
                                    Ok(String::from_utf8(segment.clone())?)
                                }
                                other => Err(TorrentMetaError::FieldTypeError {
                                    expected: "String".to_string(),
                                    found: other.field_type(),
                                }),
                            })
                            .collect::<Result<Vec<String>, TorrentMetaError>>()?,
                        None => {
                            return Err(TorrentMetaError::MissingRequiredField(
                                "path".to_string(),
                            ))
                        }
                        Some(other) => {
                            return Err(TorrentMetaError::FieldTypeError {
                                expected: "List".to_string(),
                                found: other.field_type(),
                            })
                        }
                    };
                    Ok(segments.join("/"))
                }
                other => Err(TorrentMetaError::FieldTypeError {
                    expected: "Dict".to_string(),
                    found: other.field_type(),
                }),
            })
            .collect::<Result<Vec<String>, TorrentMetaError>>()?,
        None => {
            return Err(TorrentMetaError::MissingRequiredField(
                "files".to_string(),
            ))
        }
        Some(other) => {
            return Err(TorrentMetaError::FieldTypeError {
                expected: "List".to_string(),
                found: other.field_type(),
            })
        }
    };

    Ok(TorrentMetadata::new(name, files))
}

pub fn parse_torrent_file(
    file_path: impl AsRef<Path>,
) -> Result<TorrentMetadata, TorrentMetaError> {
    let bencoded = std::fs::read(file_path)?;
    parse_torrent_metadata(&bencoded)
}
