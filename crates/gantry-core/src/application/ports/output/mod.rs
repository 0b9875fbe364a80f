//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffolding engine needs from external
//! systems. The `gantry-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ComponentKind, RenderedComponent};
use crate::error::GantryResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gantry_adapters::filesystem::LocalFilesystem` (production)
/// - `gantry_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The port writes unconditionally; the skip-if-exists policy lives in
/// `Materializer`, so every adapter gets it for free.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GantryResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> GantryResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> GantryResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for component rendering.
///
/// Implementations must be pure: the same `(kind, relative_path, name)`
/// always yields byte-identical output, otherwise re-running a scaffold
/// would not be a no-op.
pub trait ComponentRenderer: Send + Sync {
    fn render(&self, kind: ComponentKind, relative_path: &str, name: &str) -> RenderedComponent;
}

/// Port answering "is this command installed?".
#[cfg_attr(test, mockall::automock)]
pub trait ToolChecker: Send + Sync {
    fn is_available(&self, tool: &str) -> bool;
}

/// Port for the optional version-control bootstrap.
#[cfg_attr(test, mockall::automock)]
pub trait VcsInitializer: Send + Sync {
    /// Whether `root` already holds a repository.
    fn is_repository(&self, root: &Path) -> bool;

    /// Create an empty repository in `root`.
    fn initialize(&self, root: &Path) -> GantryResult<()>;
}
