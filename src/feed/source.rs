//! Reading feed text from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for feed file access.
#[derive(Debug, Error)]
pub enum FeedSourceError {
    #[error("feed file not found at: {0}")]
    NotFound(PathBuf),
    #[error("failed to read feed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a feed file as UTF-8 text.
pub fn read_feed_file(path: &Path) -> Result<String, FeedSourceError> {
    if !path.exists() {
        return Err(FeedSourceError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| FeedSourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_feed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "A:/a\nB:/b").unwrap();

        let text = read_feed_file(file.path()).unwrap();
        assert_eq!(text, "A:/a\nB:/b");
    }

    #[test]
    fn test_missing_feed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(
            read_feed_file(&path),
            Err(FeedSourceError::NotFound(p)) if p == path
        ));
    }
}
