use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recursively collects every regular file under `root`.
///
/// Directories themselves are not reported, only the files inside
/// them, so the result is directly comparable with the path set a
/// torrent declares.
pub fn scan_files(root: &Path) -> io::Result<HashSet<PathBuf>> {
    let mut files = HashSet::new();
    collect(root, &mut files)?;
    Ok(files)
}

fn collect(dir: &Path, files: &mut HashSet<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(&path, files)?;
        } else {
            files.insert(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_files_recursive() {
        let root =
            std::env::temp_dir().join(format!("torrent-tools-scan-{}", std::process::id()));
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.txt"), b"a").unwrap();
        fs::write(root.join("sub").join("b.txt"), b"b").unwrap();

        let files = scan_files(&root).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.contains(&root.join("a.txt")));
        assert!(files.contains(&root.join("sub").join("b.txt")));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_scan_missing_root() {
        assert!(scan_files(Path::new("/nonexistent/never")).is_err());
    }
}
