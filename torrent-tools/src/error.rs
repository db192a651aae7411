use thiserror::Error;
use torrent_meta::error::TorrentMetaError;

#[derive(Error, Debug)]
pub enum TorrentToolsError {
    #[error("Torrent Meta Error: {0}")]
    TorrentMetaError(#[from] TorrentMetaError),

    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
}

pub type TorrentToolsResult<T> = Result<T, TorrentToolsError>;
