//! Unified error handling for Gantry Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Gantry Core operations.
#[derive(Debug, Error, Clone)]
pub enum GantryError {
    /// Errors from the domain layer (invalid declarations, template markers).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl GantryError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    MissingTool,
    Filesystem,
    Template,
    Internal,
}

/// Convenient result type alias.
pub type GantryResult<T> = Result<T, GantryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn categories_follow_the_wrapped_error() {
        let missing: GantryError = ApplicationError::MissingTool {
            tool: "cargo".into(),
        }
        .into();
        assert_eq!(missing.category(), ErrorCategory::MissingTool);

        let io: GantryError = ApplicationError::FilesystemError {
            path: PathBuf::from("x"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(io.category(), ErrorCategory::Filesystem);

        let template: GantryError = DomainError::MarkerMissing {
            marker: crate::domain::MEMBERS_MARKER,
        }
        .into();
        assert_eq!(template.category(), ErrorCategory::Template);

        let command: GantryError = ApplicationError::CommandFailed {
            command: "git init".into(),
            reason: "exit status 128".into(),
        }
        .into();
        assert_eq!(command.category(), ErrorCategory::Internal);
    }

    #[test]
    fn missing_tool_suggestions_name_the_tool() {
        let err: GantryError = ApplicationError::MissingTool {
            tool: "cargo".into(),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("cargo")));
    }
}
