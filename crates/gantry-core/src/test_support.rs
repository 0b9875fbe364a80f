//! In-crate test doubles.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::GantryResult,
};

#[derive(Default)]
struct State {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    failing: HashSet<PathBuf>,
    writes: usize,
}

/// Minimal filesystem double with write-failure injection.
#[derive(Default)]
pub struct FakeFilesystem {
    state: Mutex<State>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, path: &Path, content: &str) {
        let mut state = self.state.lock().unwrap();
        state.files.insert(path.to_path_buf(), content.to_string());
    }

    pub fn fail_writes_to(&self, path: &Path) {
        self.state.lock().unwrap().failing.insert(path.to_path_buf());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub fn is_untouched(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.writes == 0 && state.dirs.is_empty()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        let mut state = self.state.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            state.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GantryResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }
        state.writes += 1;
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> GantryResult<String> {
        self.read(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }
}
