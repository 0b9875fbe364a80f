//! Git repository bootstrap.

use std::path::Path;
use std::process::{Command, Stdio};

use gantry_core::{
    application::{ApplicationError, ports::VcsInitializer},
    error::GantryResult,
};
use tracing::{debug, instrument};

/// Initializes repositories with `git init`.
#[derive(Debug, Clone)]
pub struct GitInitializer {
    program: String,
}

impl GitInitializer {
    /// Use `program` as the git executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitInitializer {
    fn default() -> Self {
        Self::new("git")
    }
}

impl VcsInitializer for GitInitializer {
    fn is_repository(&self, root: &Path) -> bool {
        root.join(".git").exists()
    }

    #[instrument(skip(self), fields(program = %self.program))]
    fn initialize(&self, root: &Path) -> GantryResult<()> {
        let command = format!("{} init", self.program);
        let output = Command::new(&self.program)
            .args(["init", "--quiet"])
            .current_dir(root)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::CommandFailed {
                command,
                reason: format!("{}: {}", output.status, stderr.trim()),
            }
            .into());
        }

        debug!(root = %root.display(), "Repository initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::error::ErrorCategory;
    use tempfile::TempDir;

    #[test]
    fn detects_existing_repository() {
        let temp = TempDir::new().unwrap();
        let git = GitInitializer::default();
        assert!(!git.is_repository(temp.path()));

        std::fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(git.is_repository(temp.path()));
    }

    #[test]
    fn missing_program_is_a_command_failure() {
        let temp = TempDir::new().unwrap();
        let git = GitInitializer::new("gantry-no-such-git-4f2a");

        let err = git.initialize(temp.path()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("gantry-no-such-git-4f2a init"));
    }
}
