//! Component value objects: what gets declared, rendered and materialized.
//!
//! A [`ComponentSpec`] is created by the orchestrator when a blueprint
//! section is declared, turned into a [`RenderedComponent`] by a renderer
//! port, and written to disk as a [`GeneratedComponent`].

use std::fmt;

use serde::Serialize;

use crate::domain::{error::DomainError, validation::DomainValidator};

/// Manifest fragment file name inside every component directory.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// README file name inside every component directory.
pub const README_FILE: &str = "README.md";

// ── ComponentKind ────────────────────────────────────────────────────────────

/// Buildable unit flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Library,
    Binary,
}

impl ComponentKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Binary => "binary",
        }
    }

    /// Relative path of the single source stub for this kind.
    pub const fn source_file(&self) -> &'static str {
        match self {
            Self::Library => "src/lib.rs",
            Self::Binary => "src/main.rs",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ComponentSpec ────────────────────────────────────────────────────────────

/// Declaration of one workspace member.
///
/// Immutable once created. The display name is always the final segment of
/// the relative path, so `gateway/bin/gatewayd` is named `gatewayd`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentSpec {
    kind: ComponentKind,
    relative_path: String,
    display_name: String,
}

impl ComponentSpec {
    /// Create a spec, validating the relative path.
    pub fn new(kind: ComponentKind, relative_path: impl Into<String>) -> Result<Self, DomainError> {
        let relative_path = relative_path.into();
        DomainValidator::validate_relative_path(&relative_path)?;

        let display_name = relative_path
            .rsplit('/')
            .next()
            .unwrap_or(relative_path.as_str())
            .to_string();

        Ok(Self {
            kind,
            relative_path,
            display_name,
        })
    }

    pub fn library(relative_path: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(ComponentKind::Library, relative_path)
    }

    pub fn binary(relative_path: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(ComponentKind::Binary, relative_path)
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl fmt::Display for ComponentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.relative_path)
    }
}

// ── RenderedComponent ────────────────────────────────────────────────────────

/// File contents for one component, produced by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent {
    pub manifest: String,
    pub readme: String,
    pub source: String,
    pub source_file: &'static str,
}

impl RenderedComponent {
    /// Files in write order, paths relative to the component directory.
    pub fn files(&self) -> [(&str, &str); 3] {
        [
            (MANIFEST_FILE, self.manifest.as_str()),
            (README_FILE, self.readme.as_str()),
            (self.source_file, self.source.as_str()),
        ]
    }
}

// ── GeneratedComponent ───────────────────────────────────────────────────────

/// Result of a single write-if-absent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    Written,
    Skipped,
}

/// A component that has been materialized on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    pub spec: ComponentSpec,
    /// Project-relative file paths and what happened to each.
    pub files: Vec<(String, WriteOutcome)>,
}

impl GeneratedComponent {
    pub fn written_count(&self) -> usize {
        self.count(WriteOutcome::Written)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(WriteOutcome::Skipped)
    }

    fn count(&self, outcome: WriteOutcome) -> usize {
        self.files.iter().filter(|(_, o)| *o == outcome).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_final_segment() {
        let spec = ComponentSpec::binary("gateway/bin/gatewayd").unwrap();
        assert_eq!(spec.display_name(), "gatewayd");
        assert_eq!(spec.relative_path(), "gateway/bin/gatewayd");
        assert_eq!(spec.kind(), ComponentKind::Binary);
    }

    #[test]
    fn single_segment_path_names_itself() {
        let spec = ComponentSpec::library("shared").unwrap();
        assert_eq!(spec.display_name(), "shared");
    }

    #[test]
    fn invalid_paths_are_rejected() {
        assert!(ComponentSpec::library("").is_err());
        assert!(ComponentSpec::library("/abs/path").is_err());
        assert!(ComponentSpec::library("gateway/../escape").is_err());
    }

    #[test]
    fn source_file_follows_kind() {
        assert_eq!(ComponentKind::Library.source_file(), "src/lib.rs");
        assert_eq!(ComponentKind::Binary.source_file(), "src/main.rs");
    }

    #[test]
    fn rendered_files_are_ordered() {
        let rendered = RenderedComponent {
            manifest: "m".into(),
            readme: "r".into(),
            source: "s".into(),
            source_file: "src/lib.rs",
        };
        let names: Vec<_> = rendered.files().iter().map(|(p, _)| *p).collect();
        assert_eq!(names, ["Cargo.toml", "README.md", "src/lib.rs"]);
    }
}
