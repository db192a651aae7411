use std::collections::HashSet;
use std::path::PathBuf;

/// Result of comparing the torrent-declared path set against the
/// paths actually found on disk. Both groups are sorted so output is
/// deterministic.
pub struct DiffReport {
    pub only_in_torrent: Vec<PathBuf>,
    pub only_on_disk: Vec<PathBuf>,
}

pub fn symmetric_diff(
    in_torrent: &HashSet<PathBuf>,
    on_disk: &HashSet<PathBuf>,
) -> DiffReport {
    let mut only_in_torrent: Vec<PathBuf> = in_torrent.difference(on_disk).cloned().collect();
    only_in_torrent.sort();

    let mut only_on_disk: Vec<PathBuf> = on_disk.difference(in_torrent).cloned().collect();
    only_on_disk.sort();

    DiffReport {
        only_in_torrent,
        only_on_disk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_diff() {
        let in_torrent: HashSet<PathBuf> = ["t/b", "t/a", "t/shared"]
            .iter()
            .map(PathBuf::from)
            .collect();
        let on_disk: HashSet<PathBuf> = ["t/shared", "t/z", "t/c"]
            .iter()
            .map(PathBuf::from)
            .collect();

        let report = symmetric_diff(&in_torrent, &on_disk);

        assert_eq!(
            report.only_in_torrent,
            [PathBuf::from("t/a"), PathBuf::from("t/b")]
        );
        assert_eq!(
            report.only_on_disk,
            [PathBuf::from("t/c"), PathBuf::from("t/z")]
        );
    }

    #[test]
    fn test_symmetric_diff_identical() {
        let set: HashSet<PathBuf> = ["x"].iter().map(PathBuf::from).collect();
        let report = symmetric_diff(&set, &set);
        assert!(report.only_in_torrent.is_empty());
        assert!(report.only_on_disk.is_empty());
    }
}
