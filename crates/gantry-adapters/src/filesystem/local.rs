//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use gantry_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GantryError, GantryResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GantryResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> GantryResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GantryError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("a/b");
        let file = dir.join("c.txt");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, "hello").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn write_into_missing_directory_is_a_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .write_file(&temp.path().join("missing/c.txt"), "x")
            .unwrap_err();

        assert_eq!(
            err.category(),
            gantry_core::error::ErrorCategory::Filesystem
        );
    }
}
