//! The default action: scaffold the gateway monorepo.
//!
//! Responsibility: resolve the project name and root, wire the adapters
//! into a `ScaffoldService`, and display results. No scaffolding logic
//! lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use gantry_adapters::{
    CargoRenderer, CommandToolChecker, GitInitializer, LocalFilesystem,
    blueprint::{self, load_manifest_template},
};
use gantry_core::{
    application::{ManifestOutcome, ScaffoldPlan, ScaffoldReport, ScaffoldService, VcsOutcome},
    domain::Blueprint,
    error::GantryError,
};

use crate::{
    cli::{ScaffoldArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the scaffold action.
///
/// 1. Resolve and validate the project name and root
/// 2. Build the blueprint, swapping in a custom root manifest if configured
/// 3. Plan (`--dry-run`) or run the scaffold
/// 4. Print the plan, report or JSON
#[instrument(skip_all, fields(project = args.project_name.as_deref().unwrap_or("<default>")))]
pub fn execute(
    args: ScaffoldArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    // 1. Resolve project root
    let project_name = args
        .project_name
        .clone()
        .unwrap_or_else(|| config.project.default_name.clone());
    validate_project_name(&project_name)?;

    let project_root = args.output_dir.join(&project_name);
    if project_root.exists() && !project_root.is_dir() {
        return Err(CliError::NotADirectory { path: project_root });
    }

    // 2. Blueprint
    let template = args
        .template
        .clone()
        .or_else(|| config.root_manifest_template(global.config.as_deref()));
    let blueprint = build_blueprint(template.as_deref())?;

    let options = config.scaffold_options(!args.no_vcs);
    let vcs_program = options.vcs_tool.clone().unwrap_or_else(|| "git".into());
    let service = ScaffoldService::new(
        Box::new(CargoRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(CommandToolChecker::new()),
        Box::new(GitInitializer::new(vcs_program)),
    );

    debug!(
        root = %project_root.display(),
        required_tools = ?options.required_tools,
        vcs_tool = ?options.vcs_tool,
        init_vcs = options.init_vcs,
        "Scaffold options resolved"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&blueprint, &project_name, &project_root, &options)?;
        return show_plan(&plan, output);
    }

    output.header(&format!(
        "Creating '{project_name}' in {}",
        project_root.display()
    ))?;
    info!(project = %project_name, path = %project_root.display(), "Scaffold started");

    let report = service.scaffold(&blueprint, &project_name, &project_root, &options)?;

    // 4. Report
    show_report(&report, output)
}

/// Project names become a directory and appear in generated files, so
/// they are restricted to a portable character set.
pub(crate) fn validate_project_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| CliError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(&format!("character '{c}' is not allowed")));
    }
    Ok(())
}

fn build_blueprint(template: Option<&Path>) -> CliResult<Blueprint> {
    let blueprint = blueprint::monorepo().map_err(GantryError::from)?;
    match template {
        Some(path) => {
            debug!(template = %path.display(), "Using custom root manifest template");
            let manifest = load_manifest_template(path)?;
            Ok(blueprint.with_root_manifest(manifest))
        }
        None => Ok(blueprint),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &ScaffoldPlan, out: &OutputManager) -> CliResult<()> {
    out.json(plan)?;

    out.header(&format!(
        "Dry run: '{}' at {}",
        plan.project_name,
        plan.project_root.display()
    ))?;
    for file in &plan.files {
        let marker = if file.exists { "=" } else { "+" };
        let note = if file.exists { " (exists, skipped)" } else { "" };
        out.item(&format!("{marker} {}{note}", file.path))?;
    }
    out.print("")?;
    out.print(&format!("Workspace members ({}):", plan.members.len()))?;
    for member in &plan.members {
        out.item(member)?;
    }
    out.print("")?;
    out.info("Dry run: nothing was written")?;
    Ok(())
}

fn show_report(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    out.json(report)?;

    match report.manifest {
        ManifestOutcome::Overwritten => {
            out.warning("Existing root Cargo.toml differed and was regenerated")?
        }
        ManifestOutcome::Unchanged => out.info("Root Cargo.toml already up to date")?,
        ManifestOutcome::Created => {}
    }

    match &report.vcs {
        VcsOutcome::Initialized => out.info("Initialised a git repository")?,
        VcsOutcome::AlreadyInitialized | VcsOutcome::Disabled => {}
        VcsOutcome::Skipped(reason) => {
            out.warning(&format!("Repository not initialised: {reason}"))?
        }
        VcsOutcome::Failed(reason) => {
            out.warning(&format!("Repository init failed: {reason}"))?
        }
    }

    out.success(&format!(
        "Workspace '{}' ready: {} members, {} files written, {} skipped",
        report.project_name,
        report.members.len(),
        report.files_written,
        report.files_skipped,
    ))?;

    if !out.is_quiet() {
        out.print("")?;
        out.print("Next steps:")?;
        out.item(&format!("cd {}", display_root(&report.project_root)))?;
        out.item("just build")?;
        out.item("just test")?;
    }

    Ok(())
}

fn display_root(root: &Path) -> String {
    root.strip_prefix(".")
        .map(PathBuf::from)
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
