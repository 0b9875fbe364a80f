//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;
use crate::error::ErrorCategory;

/// Errors that occur while driving a scaffold run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A hard-required external tool is not on `PATH`.
    #[error("Required tool '{tool}' was not found")]
    MissingTool { tool: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The root manifest template could not be assembled.
    #[error("Root manifest template error: {source}")]
    ManifestTemplate {
        #[source]
        source: DomainError,
    },

    /// An external command ran but did not succeed.
    #[error("Command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Shared adapter state is unusable (poisoned lock).
    #[error("Adapter state lock poisoned: {name}")]
    LockPoisoned { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingTool { tool } => vec![
                format!("Install '{}' and make sure it is on your PATH", tool),
                "Or remove it from preflight.required_tools in your config".into(),
                "No files were written".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place; re-running is safe".into(),
            ],
            Self::ManifestTemplate { source } => {
                let mut out = source.suggestions();
                out.push("The root manifest was not written".into());
                out
            }
            Self::CommandFailed { command, .. } => vec![
                format!("'{}' did not complete", command),
                "Run it by hand inside the project directory to see its output".into(),
            ],
            Self::LockPoisoned { .. } => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingTool { .. } => ErrorCategory::MissingTool,
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::ManifestTemplate { .. } => ErrorCategory::Template,
            Self::CommandFailed { .. } | Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}
