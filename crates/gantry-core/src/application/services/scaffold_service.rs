//! Scaffold Service - main application orchestrator.
//!
//! Drives one run through a fixed sequence of phases:
//!
//! ```text
//! Preflight -> Declaring -> Assembling -> Finalizing -> Done
//! ```
//!
//! 1. **Preflight** checks required tools (fatal) and the version-control
//!    tool (optional). Nothing is written before this phase passes.
//! 2. **Declaring** walks the blueprint sections in order. Components are
//!    rendered, materialized and registered; plain files are written
//!    directly and never become workspace members.
//! 3. **Assembling** injects the registered members into the root manifest
//!    template. A template error aborts the run with no manifest written.
//! 4. **Finalizing** bootstraps version control, best effort.
//!
//! There are no retries and no rollback: a failed run leaves what it wrote,
//! and re-running is safe because existing files are skipped.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, Materializer,
        ports::{ComponentRenderer, Filesystem, ToolChecker, VcsInitializer},
    },
    domain::{
        Blueprint, ComponentRegistry, DomainValidator, MANIFEST_FILE,
        RenderContext, SectionContent, WriteOutcome, assemble,
    },
    error::{GantryError, GantryResult},
};

// ── Phases ────────────────────────────────────────────────────────────────────

/// Orchestrator state. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Preflight,
    Declaring,
    Assembling,
    Finalizing,
    Done,
}

impl Phase {
    /// The only phase allowed to follow this one.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Preflight => Some(Self::Declaring),
            Self::Declaring => Some(Self::Assembling),
            Self::Assembling => Some(Self::Finalizing),
            Self::Finalizing => Some(Self::Done),
            Self::Done => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preflight => "preflight",
            Self::Declaring => "declaring",
            Self::Assembling => "assembling",
            Self::Finalizing => "finalizing",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct PhaseTracker {
    current: Phase,
}

impl PhaseTracker {
    fn start() -> Self {
        debug!(phase = %Phase::Preflight, "Entering phase");
        Self {
            current: Phase::Preflight,
        }
    }

    fn advance(&mut self) -> Phase {
        match self.current.next() {
            Some(next) => {
                debug!(from = %self.current, to = %next, "Entering phase");
                self.current = next;
            }
            None => debug_assert!(false, "advance called after Done"),
        }
        self.current
    }
}

// ── Options & reports ─────────────────────────────────────────────────────────

/// Knobs for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Tools that must exist; a missing one stops the run in preflight.
    pub required_tools: Vec<String>,
    /// Version-control command; `None` disables finalizing.
    pub vcs_tool: Option<String>,
    /// Whether to attempt version-control init at all.
    pub init_vcs: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            required_tools: vec!["cargo".into()],
            vcs_tool: Some("git".into()),
            init_vcs: true,
        }
    }
}

/// What happened to the root manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestOutcome {
    Created,
    /// An identical manifest was already present.
    Unchanged,
    /// A different manifest was replaced.
    Overwritten,
}

/// What happened in the finalizing phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum VcsOutcome {
    Initialized,
    AlreadyInitialized,
    /// Turned off by the caller, or no tool configured.
    Disabled,
    /// The tool is unavailable.
    Skipped(String),
    Failed(String),
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub project_root: PathBuf,
    /// Workspace members in declaration order.
    pub members: Vec<String>,
    pub files_written: usize,
    pub files_skipped: usize,
    pub manifest: ManifestOutcome,
    pub vcs: VcsOutcome,
}

/// A file a run would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: String,
    /// Already present, so a real run would skip it.
    pub exists: bool,
}

/// Dry-run result: everything a run would do, nothing written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub project_name: String,
    pub project_root: PathBuf,
    pub members: Vec<String>,
    pub files: Vec<PlannedFile>,
    pub manifest: String,
}

// ── Service ───────────────────────────────────────────────────────────────────

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn ComponentRenderer>,
    filesystem: Box<dyn Filesystem>,
    tools: Box<dyn ToolChecker>,
    vcs: Box<dyn VcsInitializer>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        renderer: Box<dyn ComponentRenderer>,
        filesystem: Box<dyn Filesystem>,
        tools: Box<dyn ToolChecker>,
        vcs: Box<dyn VcsInitializer>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            tools,
            vcs,
        }
    }

    /// Run the full pipeline for `blueprint` into `project_root`.
    #[instrument(
        skip_all,
        fields(project = %project_name, root = %project_root.display())
    )]
    pub fn scaffold(
        &self,
        blueprint: &Blueprint,
        project_name: &str,
        project_root: &Path,
        options: &ScaffoldOptions,
    ) -> GantryResult<ScaffoldReport> {
        let mut phase = PhaseTracker::start();

        // ── Preflight ─────────────────────────────────────────────────────
        let vcs_skip = self.preflight(blueprint, options)?;
        let manifest_path = project_root.join(MANIFEST_FILE);
        let manifest_existed = self.filesystem.exists(&manifest_path);
        if manifest_existed {
            info!(path = %manifest_path.display(), "Root manifest already present");
        }

        // ── Declaring ─────────────────────────────────────────────────────
        phase.advance();
        let ctx = RenderContext::new(project_name);
        let materializer = Materializer::new(self.filesystem.as_ref(), project_root);
        let mut registry = ComponentRegistry::new();
        let mut written = 0;
        let mut skipped = 0;

        self.filesystem.create_dir_all(project_root)?;

        for section in blueprint.sections() {
            debug!(section = %section.name, "Declaring section");
            match &section.content {
                SectionContent::Components(specs) => {
                    for spec in specs {
                        let rendered = self.renderer.render(
                            spec.kind(),
                            spec.relative_path(),
                            spec.display_name(),
                        );
                        let generated = materializer.materialize(spec, &rendered)?;
                        written += generated.written_count();
                        skipped += generated.skipped_count();
                        registry.append(spec.relative_path());
                        info!(component = %spec, "Component materialized");
                    }
                }
                SectionContent::Files(files) => {
                    for file in files {
                        let content = ctx.render(file.contents());
                        match materializer.write_if_absent(file.relative_path(), &content)? {
                            WriteOutcome::Written => written += 1,
                            WriteOutcome::Skipped => skipped += 1,
                        }
                    }
                }
            }
        }

        // ── Assembling ────────────────────────────────────────────────────
        phase.advance();
        let members = registry.drain();
        let manifest_text = assemble_manifest(blueprint, &members, &ctx)?;
        let manifest = self.write_manifest(&manifest_path, &manifest_text, manifest_existed)?;

        // ── Finalizing ────────────────────────────────────────────────────
        phase.advance();
        let vcs = match vcs_skip {
            Some(outcome) => outcome,
            None => self.finalize(project_root),
        };

        phase.advance();
        info!(
            members = members.len(),
            files_written = written,
            files_skipped = skipped,
            "Scaffold completed"
        );

        Ok(ScaffoldReport {
            project_name: project_name.to_string(),
            project_root: project_root.to_path_buf(),
            members,
            files_written: written,
            files_skipped: skipped,
            manifest,
            vcs,
        })
    }

    /// Compute what [`Self::scaffold`] would do without writing anything.
    ///
    /// Preflight still runs, so a missing required tool fails the plan too.
    #[instrument(skip_all, fields(project = %project_name))]
    pub fn plan(
        &self,
        blueprint: &Blueprint,
        project_name: &str,
        project_root: &Path,
        options: &ScaffoldOptions,
    ) -> GantryResult<ScaffoldPlan> {
        self.preflight(blueprint, options)?;

        let ctx = RenderContext::new(project_name);
        let mut registry = ComponentRegistry::new();
        let mut files = Vec::new();
        let mut plan_file = |path: String| {
            let exists = self.filesystem.exists(&project_root.join(&path));
            files.push(PlannedFile { path, exists });
        };

        for section in blueprint.sections() {
            match &section.content {
                SectionContent::Components(specs) => {
                    for spec in specs {
                        let rendered = self.renderer.render(
                            spec.kind(),
                            spec.relative_path(),
                            spec.display_name(),
                        );
                        for (file, _) in rendered.files() {
                            plan_file(format!("{}/{}", spec.relative_path(), file));
                        }
                        registry.append(spec.relative_path());
                    }
                }
                SectionContent::Files(section_files) => {
                    for file in section_files {
                        plan_file(file.relative_path().to_string());
                    }
                }
            }
        }

        let members = registry.drain();
        let manifest = assemble_manifest(blueprint, &members, &ctx)?;
        plan_file(MANIFEST_FILE.to_string());

        Ok(ScaffoldPlan {
            project_name: project_name.to_string(),
            project_root: project_root.to_path_buf(),
            members,
            files,
            manifest,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Validate inputs and probe tools. Returns the version-control outcome
    /// up front when the finalizing phase will not run.
    fn preflight(
        &self,
        blueprint: &Blueprint,
        options: &ScaffoldOptions,
    ) -> GantryResult<Option<VcsOutcome>> {
        DomainValidator::validate_blueprint(blueprint)?;

        for tool in &options.required_tools {
            if !self.tools.is_available(tool) {
                return Err(ApplicationError::MissingTool { tool: tool.clone() }.into());
            }
            debug!(tool = %tool, "Required tool found");
        }

        if !options.init_vcs {
            return Ok(Some(VcsOutcome::Disabled));
        }
        match options.vcs_tool.as_deref() {
            None => Ok(Some(VcsOutcome::Disabled)),
            Some(tool) if self.tools.is_available(tool) => Ok(None),
            Some(tool) => {
                warn!(tool = %tool, "Version-control tool not found; repository will not be initialized");
                Ok(Some(VcsOutcome::Skipped(format!("'{tool}' not found"))))
            }
        }
    }

    fn write_manifest(
        &self,
        path: &Path,
        text: &str,
        existed: bool,
    ) -> GantryResult<ManifestOutcome> {
        if !existed {
            self.filesystem.write_file(path, text)?;
            return Ok(ManifestOutcome::Created);
        }

        if self.filesystem.read_to_string(path)? == text {
            debug!("Root manifest up to date");
            return Ok(ManifestOutcome::Unchanged);
        }

        warn!(path = %path.display(), "Overwriting existing root manifest");
        self.filesystem.write_file(path, text)?;
        Ok(ManifestOutcome::Overwritten)
    }

    fn finalize(&self, root: &Path) -> VcsOutcome {
        if self.vcs.is_repository(root) {
            debug!("Repository already initialized");
            return VcsOutcome::AlreadyInitialized;
        }

        match self.vcs.initialize(root) {
            Ok(()) => {
                info!("Repository initialized");
                VcsOutcome::Initialized
            }
            Err(e) => {
                warn!(error = %e, "Version-control init failed; continuing");
                VcsOutcome::Failed(e.to_string())
            }
        }
    }
}

fn assemble_manifest(
    blueprint: &Blueprint,
    members: &[String],
    ctx: &RenderContext,
) -> GantryResult<String> {
    let text = assemble(blueprint.root_manifest(), members).map_err(|source| {
        GantryError::from(ApplicationError::ManifestTemplate { source })
    })?;
    Ok(ctx.render(&text))
}
