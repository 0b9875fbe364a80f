//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use gantry_core::{
    application::{ApplicationError, ports::Filesystem},
    error::GantryResult,
};

/// In-memory filesystem for testing.
///
/// Cheap to clone; clones share state, so a test can hand one clone to the
/// service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Put a file in place without counting it as a write.
    pub fn seed_file(&self, path: &Path, content: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
    }

    /// Make every write at or below `path` fail.
    pub fn make_read_only(&self, path: &Path) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.to_path_buf());
        }
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Snapshot of every file and its content, sorted by path.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        self.inner
            .read()
            .map(|inner| inner.files.clone())
            .unwrap_or_default()
    }

    /// Number of successful `write_file` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }

    /// `true` if nothing has been created or written.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.is_empty() && inner.directories.is_empty())
            .unwrap_or(true)
    }
}

impl MemoryFilesystemInner {
    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.iter().any(|ro| path.starts_with(ro))
    }
}

fn lock_error() -> ApplicationError {
    ApplicationError::LockPoisoned {
        name: "memory filesystem",
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        if inner.is_read_only(path) && !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GantryResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        if inner.is_read_only(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> GantryResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
