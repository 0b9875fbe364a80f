//! Application layer for Gantry.
//!
//! This layer contains:
//! - **Services**: the scaffold orchestrator and the materializer
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ManifestOutcome, Materializer, Phase, PlannedFile, ScaffoldOptions, ScaffoldPlan,
    ScaffoldReport, ScaffoldService, VcsOutcome,
};

pub use ports::{ComponentRenderer, Filesystem, ToolChecker, VcsInitializer};

pub use error::ApplicationError;
