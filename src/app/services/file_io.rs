use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::{AppError, Result};

/// Read a whole file as text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AppError::io(path, e))
}

/// Write `text` to `path`, replacing any previous contents.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| AppError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let text = "line one\nline two\n\tтекст\n";
        write_text(&path, text).unwrap();
        assert_eq!(read_text(&path).unwrap(), text);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        write_text(&path, "a much longer first version").unwrap();
        write_text(&path, "short").unwrap();
        assert_eq!(read_text(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(read_text(dir.path()).is_err());
    }

    #[test]
    fn test_write_without_parent_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.txt");
        assert!(matches!(write_text(&path, "x"), Err(AppError::Io { .. })));
    }
}
