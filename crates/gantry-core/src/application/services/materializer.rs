//! Filesystem materialization with a skip-if-exists policy.
//!
//! [`Materializer::write_if_absent`] is the only write primitive the engine
//! uses. An existing file is never touched, which is what makes a second run
//! over the same project root a no-op and keeps user edits safe.

use std::path::Path;

use tracing::{debug, trace};

use crate::{
    application::ports::Filesystem,
    domain::{ComponentSpec, GeneratedComponent, RenderedComponent, WriteOutcome},
    error::GantryResult,
};

/// Writes rendered output below a project root.
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, root: &'a Path) -> Self {
        Self { filesystem, root }
    }

    /// Write `content` to `relative_path` unless something is already there.
    ///
    /// Parent directories are created as needed.
    pub fn write_if_absent(&self, relative_path: &str, content: &str) -> GantryResult<WriteOutcome> {
        let path = self.root.join(relative_path);

        if self.filesystem.exists(&path) {
            debug!(path = %relative_path, "File exists, skipping");
            return Ok(WriteOutcome::Skipped);
        }

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, content)?;

        trace!(path = %relative_path, bytes = content.len(), "File written");
        Ok(WriteOutcome::Written)
    }

    /// Create the component directory and write its three files.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    pub fn materialize(
        &self,
        spec: &ComponentSpec,
        rendered: &RenderedComponent,
    ) -> GantryResult<GeneratedComponent> {
        self.filesystem
            .create_dir_all(&self.root.join(spec.relative_path()))?;

        let mut files = Vec::with_capacity(3);
        for (file, content) in rendered.files() {
            let relative = format!("{}/{}", spec.relative_path(), file);
            let outcome = self.write_if_absent(&relative, content)?;
            files.push((relative, outcome));
        }

        Ok(GeneratedComponent {
            spec: spec.clone(),
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeFilesystem;

    fn rendered() -> RenderedComponent {
        RenderedComponent {
            manifest: "[package]\n".into(),
            readme: "# core\n".into(),
            source: "// stub\n".into(),
            source_file: "src/lib.rs",
        }
    }

    #[test]
    fn writes_new_file_and_creates_parents() {
        let fs = FakeFilesystem::new();
        let root = Path::new("/out/demo");
        let m = Materializer::new(&fs, root);

        let outcome = m.write_if_absent("docs/adr/0001.md", "adr").unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs.read(&root.join("docs/adr/0001.md")).as_deref(), Some("adr"));
        assert!(fs.has_dir(&root.join("docs/adr")));
    }

    #[test]
    fn existing_file_is_never_overwritten() {
        let fs = FakeFilesystem::new();
        let root = Path::new("/out/demo");
        fs.seed(&root.join("README.md"), "user edits");
        let m = Materializer::new(&fs, root);

        let outcome = m.write_if_absent("README.md", "generated").unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(fs.read(&root.join("README.md")).as_deref(), Some("user edits"));
    }

    #[test]
    fn materialize_writes_manifest_readme_and_stub() {
        let fs = FakeFilesystem::new();
        let root = Path::new("/out/demo");
        let spec = ComponentSpec::library("gateway/crates/core").unwrap();

        let generated = Materializer::new(&fs, root)
            .materialize(&spec, &rendered())
            .unwrap();

        let paths: Vec<_> = generated.files.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            paths,
            [
                "gateway/crates/core/Cargo.toml",
                "gateway/crates/core/README.md",
                "gateway/crates/core/src/lib.rs",
            ]
        );
        assert_eq!(generated.written_count(), 3);
        assert!(fs.has_dir(&root.join("gateway/crates/core")));
    }

    #[test]
    fn write_failure_surfaces_and_keeps_earlier_files() {
        let fs = FakeFilesystem::new();
        let root = Path::new("/out/demo");
        fs.fail_writes_to(&root.join("gateway/crates/core/README.md"));
        let spec = ComponentSpec::library("gateway/crates/core").unwrap();

        let result = Materializer::new(&fs, root).materialize(&spec, &rendered());

        assert!(result.is_err());
        assert!(fs.read(&root.join("gateway/crates/core/Cargo.toml")).is_some());
        assert!(fs.read(&root.join("gateway/crates/core/src/lib.rs")).is_none());
    }
}
