//! Gantry Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Gantry
//! monorepo scaffolding generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gantry-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, Materializer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, ComponentRenderer, Tools,  │
//! │           VcsInitializer)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     gantry-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ComponentSpec, ComponentRegistry,      │
//! │  ManifestTemplate, Blueprint)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gantry_core::prelude::*;
//!
//! let service = ScaffoldService::new(renderer, filesystem, tools, vcs);
//! let report = service.scaffold(&blueprint, "edge-platform", root, &ScaffoldOptions::default())?;
//! println!("{} members", report.members.len());
//! ```

pub mod application;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_support;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ManifestOutcome, ScaffoldOptions, ScaffoldPlan, ScaffoldReport, ScaffoldService,
        VcsOutcome,
        ports::{ComponentRenderer, Filesystem, ToolChecker, VcsInitializer},
    };
    pub use crate::domain::{
        Blueprint, ComponentKind, ComponentRegistry, ComponentSpec, ManifestTemplate,
        RenderContext, RenderedComponent, Section, StaticFile,
    };
    pub use crate::error::{GantryError, GantryResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
