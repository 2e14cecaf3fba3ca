use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode, encode, Value};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A parsed torrent file.
///
/// Contains all metadata from a `.torrent` file, including file information,
/// piece hashes, and the tracker URL.
///
/// # Examples
///
/// ```no_run
/// use rbenc::metainfo::Metainfo;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let metainfo = Metainfo::from_file("example.torrent")?;
///
/// println!("Torrent: {}", metainfo.info.name);
/// println!("Size: {} bytes", metainfo.info.total_length);
/// println!("Info hash: {}", metainfo.info_hash);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Metainfo {
    /// The info dictionary containing file and piece information.
    pub info: Info,
    /// The unique identifier for this torrent (hash of the info dictionary).
    pub info_hash: InfoHash,
    /// Primary tracker URL.
    pub announce: Option<String>,
    /// Unix timestamp when the torrent was created.
    pub creation_date: Option<i64>,
    /// Optional comment about the torrent.
    pub comment: Option<String>,
    /// Name/version of the program that created the torrent.
    pub created_by: Option<String>,
    raw_info: Bytes,
}

/// The info dictionary from a torrent file.
///
/// Contains the core metadata that identifies the torrent content.
/// The SHA1 hash of this dictionary (in bencode format) is the info hash.
#[derive(Debug, Clone)]
pub struct Info {
    /// Suggested name for the file or directory.
    pub name: String,
    /// Number of bytes per piece.
    pub piece_length: u64,
    /// SHA1 hash of each piece (20 bytes each).
    pub pieces: Vec<[u8; 20]>,
    /// List of files in the torrent.
    pub files: Vec<File>,
    /// Total size of all files combined.
    pub total_length: u64,
}

/// A file within a torrent.
///
/// For single-file torrents, there is one file with the torrent name.
/// For multi-file torrents, paths are relative to the torrent's root directory.
#[derive(Debug, Clone)]
pub struct File {
    /// Path to the file (relative to torrent root).
    pub path: PathBuf,
    /// Size of the file in bytes.
    pub length: u64,
    /// Byte offset within the torrent's piece data.
    pub offset: u64,
}

impl Metainfo {
    /// Parses a torrent file from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data is not valid bencode
    /// - Required fields are missing (info, name, pieces, etc.)
    /// - The pieces field length is not a multiple of 20
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let value = decode(data)?;
        let dict = value
            .try_as_dict()
            .map_err(|e| MetainfoError::WrongType("root", e))?;

        let info_value = dict
            .get(b"info".as_slice())
            .ok_or(MetainfoError::MissingField("info"))?;

        let raw_info = Bytes::from(encode(info_value));
        let info_hash = InfoHash::from_info_bytes(&raw_info);
        let info = parse_info(info_value)?;

        let announce = dict
            .get(b"announce".as_slice())
            .and_then(|v| v.as_str())
            .map(String::from);

        let creation_date = dict
            .get(b"creation date".as_slice())
            .and_then(|v| v.as_integer());

        let comment = dict
            .get(b"comment".as_slice())
            .and_then(|v| v.as_str())
            .map(String::from);

        let created_by = dict
            .get(b"created by".as_slice())
            .and_then(|v| v.as_str())
            .map(String::from);

        debug!(
            name = %info.name,
            length = info.total_length,
            pieces = info.pieces.len(),
            "parsed torrent metainfo"
        );

        Ok(Self {
            info,
            info_hash,
            announce,
            creation_date,
            comment,
            created_by,
            raw_info,
        })
    }

    /// Reads and parses a torrent file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MetainfoError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Returns the raw bencoded info dictionary.
    ///
    /// This is the exact byte sequence the info hash is computed over.
    pub fn raw_info(&self) -> &Bytes {
        &self.raw_info
    }
}

impl Info {
    /// Returns the number of pieces in the torrent.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Returns `true` if this torrent describes a single file.
    pub fn is_single_file(&self) -> bool {
        self.files.len() == 1
    }
}

fn parse_info(value: &Value) -> Result<Info, MetainfoError> {
    let dict = value
        .try_as_dict()
        .map_err(|e| MetainfoError::WrongType("info", e))?;

    let name = dict
        .get(b"name".as_slice())
        .ok_or(MetainfoError::MissingField("name"))?
        .as_str()
        .ok_or(MetainfoError::InvalidField("name"))?
        .to_string();

    let piece_length = dict
        .get(b"piece length".as_slice())
        .ok_or(MetainfoError::MissingField("piece length"))?
        .try_as_integer()
        .map_err(|e| MetainfoError::WrongType("piece length", e))?;
    let piece_length =
        u64::try_from(piece_length).map_err(|_| MetainfoError::InvalidField("piece length"))?;

    let pieces_bytes = dict
        .get(b"pieces".as_slice())
        .ok_or(MetainfoError::MissingField("pieces"))?
        .try_as_bytes()
        .map_err(|e| MetainfoError::WrongType("pieces", e))?;

    if pieces_bytes.len() % 20 != 0 {
        return Err(MetainfoError::InvalidField("pieces"));
    }

    let pieces: Vec<[u8; 20]> = pieces_bytes
        .chunks_exact(20)
        .map(|chunk| {
            let mut arr = [0u8; 20];
            arr.copy_from_slice(chunk);
            arr
        })
        .collect();

    let (files, total_length) = if let Some(length_value) = dict.get(b"length".as_slice()) {
        let length = length_value
            .try_as_integer()
            .map_err(|e| MetainfoError::WrongType("length", e))?;
        let length = u64::try_from(length).map_err(|_| MetainfoError::InvalidField("length"))?;

        let file = File {
            path: PathBuf::from(&name),
            length,
            offset: 0,
        };
        (vec![file], length)
    } else if let Some(files_value) = dict.get(b"files".as_slice()) {
        let files_list = files_value
            .try_as_list()
            .map_err(|e| MetainfoError::WrongType("files", e))?;

        let mut files = Vec::new();
        let mut offset = 0u64;

        for file_value in files_list {
            let file_dict = file_value
                .as_dict()
                .ok_or(MetainfoError::InvalidField("files"))?;

            let length = file_dict
                .get(b"length".as_slice())
                .and_then(|v| v.as_integer())
                .ok_or(MetainfoError::MissingField("file length"))?;
            let length =
                u64::try_from(length).map_err(|_| MetainfoError::InvalidField("file length"))?;

            let path_list = file_dict
                .get(b"path".as_slice())
                .and_then(|v| v.as_list())
                .ok_or(MetainfoError::MissingField("file path"))?;

            let path: PathBuf = std::iter::once(name.clone())
                .chain(
                    path_list
                        .iter()
                        .filter_map(|p| p.as_str().map(String::from)),
                )
                .collect();

            files.push(File {
                path,
                length,
                offset,
            });

            offset += length;
        }

        let total = offset;
        (files, total)
    } else {
        return Err(MetainfoError::MissingField("length or files"));
    };

    Ok(Info {
        name,
        piece_length,
        pieces,
        files,
        total_length,
    })
}
