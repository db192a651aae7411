/// Read-only view over a decoded torrent file.
///
/// Holds the two pieces of the info dictionary the tools consume: the
/// torrent's display name and its declared file paths.
#[derive(Debug)]
pub struct TorrentMetadata {
    name: String,
    files: Vec<String>,
}

impl TorrentMetadata {
    pub(crate) fn new(name: String, files: Vec<String>) -> Self {
        TorrentMetadata { name, files }
    }

    /// The torrent's display name, `info.name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative file paths declared by the torrent, one per entry of
    /// `info.files`, each the `/`-joined segments of that entry's
    /// `path` list. Source order is preserved.
    pub fn files(&self) -> &[String] {
        &self.files
    }
}
