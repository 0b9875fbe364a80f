// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the orchestrator reports and logs the same value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid component path '{path}': {reason}")]
    InvalidComponentPath { path: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate file in section '{section}': {path}")]
    DuplicateFile { section: String, path: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Root manifest template has no '{marker}' marker line")]
    MarkerMissing { marker: &'static str },

    #[error("Root manifest template has {count} '{marker}' marker lines, expected exactly one")]
    MarkerAmbiguous { marker: &'static str, count: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidComponentPath { path, reason } => vec![
                format!("Component path '{}' was rejected: {}", path, reason),
                "Use a relative path such as gateway/crates/core".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is absolute", path),
                "Every generated path must be relative to the project root".into(),
            ],
            Self::MarkerMissing { marker } | Self::MarkerAmbiguous { marker, .. } => vec![
                format!("Place exactly one '{}' line inside `members = [ ... ]`", marker),
                "Check the templates.root_manifest setting in your config".into(),
            ],
            Self::DuplicateFile { .. } => {
                vec!["This is a blueprint bug, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidComponentPath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::DuplicateFile { .. } => ErrorCategory::Validation,
            Self::MarkerMissing { .. } | Self::MarkerAmbiguous { .. } => ErrorCategory::Template,
        }
    }

    /// Whether this error comes from the root manifest template.
    pub fn is_template_error(&self) -> bool {
        self.category() == ErrorCategory::Template
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}
