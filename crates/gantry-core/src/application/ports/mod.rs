//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gantry-adapters` implement these.
//!
//! - `Filesystem`: file operations
//! - `ComponentRenderer`: component template rendering
//! - `ToolChecker`: command-existence probing for preflight
//! - `VcsInitializer`: version-control bootstrap

pub mod output;

pub use output::{ComponentRenderer, Filesystem, ToolChecker, VcsInitializer};
