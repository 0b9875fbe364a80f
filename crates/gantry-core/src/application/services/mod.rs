//! Application services - orchestrate use cases.

pub mod materializer;
pub mod scaffold_service;

pub use materializer::Materializer;
pub use scaffold_service::{
    ManifestOutcome, Phase, PlannedFile, ScaffoldOptions, ScaffoldPlan, ScaffoldReport,
    ScaffoldService, VcsOutcome,
};
