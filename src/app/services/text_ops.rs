use std::path::Path;

/// Extract the base name of a file path for use as a tab title.
///
/// Returns "Unknown" if the path has no usable file name component.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.into_owned())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename(Path::new("/home/user/test.txt")), "test.txt");
        assert_eq!(extract_filename(Path::new("/home/user/document.md")), "document.md");
        assert_eq!(extract_filename(Path::new("test.txt")), "test.txt");
        assert_eq!(extract_filename(Path::new("/path/with/many/levels/file.rs")), "file.rs");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(Path::new("/home/user/")), "user");
        assert_eq!(extract_filename(Path::new("")), "Unknown");
        assert_eq!(extract_filename(Path::new(".")), "Unknown");
        assert_eq!(extract_filename(Path::new("/")), "Unknown");
    }
}
