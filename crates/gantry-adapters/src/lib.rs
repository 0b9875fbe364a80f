//! Infrastructure adapters for Gantry.
//!
//! This crate implements the ports defined in `gantry_core::application::ports`
//! and ships the built-in monorepo blueprint. All filesystem and process I/O
//! lives here.

pub mod blueprint;
pub mod filesystem;
pub mod renderer;
pub mod tools;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::CargoRenderer;
pub use tools::CommandToolChecker;
pub use vcs::GitInitializer;
