use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    Config(String),

    #[error("Settings serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AppError {
    /// Attach the offending path to an I/O failure.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err = AppError::io(Path::new("/tmp/missing.txt"), io_err);
        assert!(matches!(app_err, AppError::Io { .. }));
        let text = app_err.to_string();
        assert!(text.contains("/tmp/missing.txt"));
        assert!(text.contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Config("invalid value".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid value");
    }
}
