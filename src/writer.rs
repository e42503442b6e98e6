//! Output stage: persist the rendered art to a text file.

use std::path::Path;

use crate::error::AsciiArtError;

/// Write `art` to `path`, overwriting any existing content.
///
/// Failures (permission denied, disk full, invalid path) are propagated, not
/// retried. Only the pipeline's final step reaches this, so a failed run never
/// leaves a partially rendered file behind.
pub fn write(path: &Path, art: &str) -> Result<(), AsciiArtError> {
    std::fs::write(path, art).map_err(|e| AsciiArtError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write(&path, "##\n..\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "##\n..\n");
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale and much longer than the new content").unwrap();
        write(&path, "#\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#\n");
    }

    #[test]
    fn test_write_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.txt");
        let err = write(&path, "#\n").unwrap_err();
        assert!(matches!(err, AsciiArtError::Write { .. }));
    }
}
