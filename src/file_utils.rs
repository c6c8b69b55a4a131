//! Shared file reading utilities for the extractor
//!
//! Source files are read whole, once per extraction request, and never cached.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve a directive path against the project root.
///
/// Absolute paths are returned unchanged.
pub fn resolve_source_path(root: &Path, relative: &str) -> PathBuf {
    let relative = Path::new(relative);
    if relative.is_absolute() {
        relative.to_path_buf()
    } else {
        root.join(relative)
    }
}

/// Read a source file into memory.
///
/// Any failure (missing file, permissions, invalid UTF-8) becomes
/// [`Error::Resource`] carrying the path, so a broken reference fails the
/// build instead of producing an empty listing.
pub fn read_source_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::resource(path, e))
}

/// Label used in the listing header: the path as written in the directive
/// with any leading `./` removed.
///
/// # Example
///
/// ```
/// use stripdoc::file_utils::header_label;
///
/// assert_eq!(header_label("./src/Script.cs"), "src/Script.cs");
/// assert_eq!(header_label("src/Script.cs"), "src/Script.cs");
/// ```
pub fn header_label(path: &str) -> &str {
    path.trim_start_matches("./")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_source_file_success() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("Test.cs");
        fs::write(&file_path, "public class Test {}").unwrap();

        let content = read_source_file(&file_path).unwrap();
        assert_eq!(content, "public class Test {}");
    }

    #[test]
    fn test_read_source_file_nonexistent() {
        let err = read_source_file(Path::new("/nonexistent/File.cs")).unwrap_err();
        match err {
            Error::Resource { path, .. } => assert_eq!(path, Path::new("/nonexistent/File.cs")),
            other => panic!("expected resource error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_source_file_directory_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_source_file(dir.path()).is_err());
    }

    #[test]
    fn test_resolve_source_path() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_source_path(root, "src/A.cs"),
            PathBuf::from("/project/src/A.cs")
        );
        assert_eq!(
            resolve_source_path(root, "/abs/B.cs"),
            PathBuf::from("/abs/B.cs")
        );
    }

    #[test]
    fn test_header_label_strips_repeated_prefix() {
        assert_eq!(header_label("././A.cs"), "A.cs");
        assert_eq!(header_label("../A.cs"), "../A.cs");
    }
}
