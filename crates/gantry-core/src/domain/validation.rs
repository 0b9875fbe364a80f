use std::path::Path;

use crate::domain::{blueprint::Blueprint, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a `/`-separated path relative to the project root.
    ///
    /// Rejects empty paths, absolute paths, empty segments, `.`/`..`
    /// segments and backslashes. The accepted form is exactly what ends up
    /// in the root manifest member list.
    pub fn validate_relative_path(path: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidComponentPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(invalid("path is empty"));
        }
        if path.starts_with('/') || Path::new(path).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.to_string(),
            });
        }
        if path.contains('\\') {
            return Err(invalid("use '/' as the separator"));
        }

        for segment in path.split('/') {
            match segment {
                "" => return Err(invalid("empty path segment")),
                "." | ".." => return Err(invalid("relative segments are not allowed")),
                _ => {}
            }
        }

        Ok(())
    }

    pub fn validate_blueprint(blueprint: &Blueprint) -> Result<(), DomainError> {
        blueprint.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_paths() {
        assert!(DomainValidator::validate_relative_path("gateway/crates/core").is_ok());
        assert!(DomainValidator::validate_relative_path("README.md").is_ok());
        assert!(DomainValidator::validate_relative_path(".github/workflows/ci.yml").is_ok());
    }

    #[test]
    fn rejects_absolute_paths() {
        assert!(matches!(
            DomainValidator::validate_relative_path("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_escaping_and_empty_segments() {
        for bad in ["", "gateway//core", "../outside", "gateway/./core", "gateway/", "a\\b"] {
            assert!(
                DomainValidator::validate_relative_path(bad).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }
}
