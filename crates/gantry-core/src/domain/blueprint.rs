//! Declarative description of a generated monorepo.
//!
//! A [`Blueprint`] is an ordered list of [`Section`]s plus the root manifest
//! template. Section order is declaration order: it decides both the write
//! order on disk and the member order in the root manifest.

use std::collections::HashSet;

use crate::domain::{
    component::ComponentSpec, error::DomainError, manifest::ManifestTemplate,
    validation::DomainValidator,
};

/// A non-component file written verbatim (after placeholder rendering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    relative_path: String,
    contents: String,
}

impl StaticFile {
    pub fn new(
        relative_path: impl Into<String>,
        contents: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let relative_path = relative_path.into();
        DomainValidator::validate_relative_path(&relative_path)?;
        Ok(Self {
            relative_path,
            contents: contents.into(),
        })
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// What a section produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    /// Rendered components, registered as workspace members.
    Components(Vec<ComponentSpec>),
    /// Plain files; never workspace members.
    Files(Vec<StaticFile>),
}

/// One logical block of the blueprint (e.g. "gateway libraries").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub content: SectionContent,
}

impl Section {
    pub fn components(name: impl Into<String>, specs: Vec<ComponentSpec>) -> Self {
        Self {
            name: name.into(),
            content: SectionContent::Components(specs),
        }
    }

    pub fn files(name: impl Into<String>, files: Vec<StaticFile>) -> Self {
        Self {
            name: name.into(),
            content: SectionContent::Files(files),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    sections: Vec<Section>,
    root_manifest: ManifestTemplate,
}

impl Blueprint {
    pub fn new(root_manifest: ManifestTemplate) -> Self {
        Self {
            sections: Vec::new(),
            root_manifest,
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Swap the root manifest template, keeping every section.
    pub fn with_root_manifest(mut self, root_manifest: ManifestTemplate) -> Self {
        self.root_manifest = root_manifest;
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn root_manifest(&self) -> &ManifestTemplate {
        &self.root_manifest
    }

    /// All component specs in declaration order.
    pub fn components(&self) -> impl Iterator<Item = &ComponentSpec> {
        self.sections
            .iter()
            .filter_map(|s| match &s.content {
                SectionContent::Components(specs) => Some(specs),
                SectionContent::Files(_) => None,
            })
            .flatten()
    }

    /// Reject a file section that lists the same path twice.
    ///
    /// Duplicate component paths are not checked here: they are a caller
    /// error the registry deliberately mirrors.
    pub fn validate(&self) -> Result<(), DomainError> {
        for section in &self.sections {
            if let SectionContent::Files(files) = &section.content {
                let mut seen = HashSet::new();
                for file in files {
                    if !seen.insert(file.relative_path()) {
                        return Err(DomainError::DuplicateFile {
                            section: section.name.clone(),
                            path: file.relative_path().to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
