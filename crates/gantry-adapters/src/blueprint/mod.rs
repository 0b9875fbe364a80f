//! Built-in gateway monorepo blueprint.
//!
//! Declares, in order, every section the generator materializes. Component
//! sections become workspace members; file sections (console, contracts,
//! plugins, tooling, docs, CI, repository files) are written as-is and are
//! never members.
//!
//! # Declaration order
//!
//! 1. gateway libraries
//! 2. gateway binary
//! 3. control-plane libraries
//! 4. control-plane service binaries
//! 5. console, contracts, plugins, tooling, docs, CI, repository files

mod files;

use std::path::Path;

use tracing::{debug, instrument};

use gantry_core::{
    domain::{
        Blueprint, ComponentKind, ComponentSpec, DomainError, ManifestTemplate, Section,
        StaticFile,
    },
    error::GantryResult,
};

use crate::filesystem::map_io_error;

pub use files::ROOT_MANIFEST;

pub const GATEWAY_LIBRARIES: &[&str] = &[
    "gateway/crates/core",
    "gateway/crates/proxy",
    "gateway/crates/router",
    "gateway/crates/plugin-host",
    "gateway/crates/telemetry",
];

pub const GATEWAY_BINARIES: &[&str] = &["gateway/bin/gatewayd"];

pub const CONTROL_PLANE_LIBRARIES: &[&str] =
    &["control-plane/crates/model", "control-plane/crates/store"];

pub const CONTROL_PLANE_SERVICES: &[&str] = &[
    "control-plane/services/admin-api",
    "control-plane/services/config-sync",
];

/// The gateway monorepo blueprint with the built-in root manifest template.
pub fn monorepo() -> Result<Blueprint, DomainError> {
    let blueprint = Blueprint::new(ManifestTemplate::new(files::ROOT_MANIFEST))
        .with_section(Section::components(
            "gateway libraries",
            specs(ComponentKind::Library, GATEWAY_LIBRARIES)?,
        ))
        .with_section(Section::components(
            "gateway binary",
            specs(ComponentKind::Binary, GATEWAY_BINARIES)?,
        ))
        .with_section(Section::components(
            "control-plane libraries",
            specs(ComponentKind::Library, CONTROL_PLANE_LIBRARIES)?,
        ))
        .with_section(Section::components(
            "control-plane services",
            specs(ComponentKind::Binary, CONTROL_PLANE_SERVICES)?,
        ))
        .with_section(Section::files(
            "console",
            static_files(&[
                ("console/README.md", files::CONSOLE_README),
                ("console/package.json", files::CONSOLE_PACKAGE_JSON),
                ("console/src/index.html", files::CONSOLE_INDEX_HTML),
            ])?,
        ))
        .with_section(Section::files(
            "contracts",
            static_files(&[
                ("contracts/openapi/admin.yaml", files::OPENAPI_ADMIN),
                ("contracts/proto/stream.proto", files::STREAM_PROTO),
                ("contracts/schemas/route.schema.json", files::ROUTE_SCHEMA),
                ("contracts/schemas/plugin.schema.json", files::PLUGIN_SCHEMA),
            ])?,
        ))
        .with_section(Section::files(
            "plugins",
            static_files(&[
                ("plugins/README.md", files::PLUGINS_README),
                ("plugins/wasm/.gitkeep", ""),
                ("plugins/native/.gitkeep", ""),
            ])?,
        ))
        .with_section(Section::files(
            "tooling",
            static_files(&[
                ("Justfile", files::JUSTFILE),
                ("tools/README.md", files::TOOLS_README),
            ])?,
        ))
        .with_section(Section::files(
            "docs",
            static_files(&[("docs/adr/0001-monorepo-layout.md", files::ADR_MONOREPO)])?,
        ))
        .with_section(Section::files(
            "ci",
            static_files(&[(".github/workflows/ci.yml", files::CI_WORKFLOW)])?,
        ))
        .with_section(Section::files(
            "repository",
            static_files(&[(".gitignore", files::GITIGNORE), ("README.md", files::README)])?,
        ));

    Ok(blueprint)
}

/// Read a user-supplied root manifest template.
///
/// The marker is not checked here; assembly reports a missing or repeated
/// marker as a template error.
#[instrument]
pub fn load_manifest_template(path: &Path) -> GantryResult<ManifestTemplate> {
    let text =
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read manifest template"))?;
    debug!(bytes = text.len(), "Loaded root manifest template");
    Ok(ManifestTemplate::new(text))
}

fn specs(kind: ComponentKind, paths: &[&str]) -> Result<Vec<ComponentSpec>, DomainError> {
    paths.iter().map(|p| ComponentSpec::new(kind, *p)).collect()
}

fn static_files(entries: &[(&str, &str)]) -> Result<Vec<StaticFile>, DomainError> {
    entries
        .iter()
        .map(|(path, contents)| StaticFile::new(*path, *contents))
        .collect()
}
