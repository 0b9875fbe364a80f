//! Core domain layer for Gantry.
//!
//! Pure logic with no I/O: component declarations, the member registry,
//! root manifest assembly and the blueprint that ties them together. All
//! filesystem and process concerns are reached through the ports in
//! `crate::application::ports`.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **No external crates**: std, thiserror and serde derives only

pub mod blueprint;
pub mod component;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod render_context;

mod validation;

pub use blueprint::{Blueprint, Section, SectionContent, StaticFile};
pub use component::{
    ComponentKind, ComponentSpec, GeneratedComponent, MANIFEST_FILE, README_FILE,
    RenderedComponent, WriteOutcome,
};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{MEMBERS_MARKER, ManifestTemplate, MarkerLocation, assemble};
pub use registry::ComponentRegistry;
pub use render_context::RenderContext;
pub use validation::DomainValidator;
