//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Project name used when none is given on the command line or in config.
pub const DEFAULT_PROJECT_NAME: &str = "edge-platform";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Running without a subcommand scaffolds a project; `completions` and
/// `config` are auxiliary.
#[derive(Debug, Parser)]
#[command(
    name    = "gantry",
    bin_name = "gantry",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold an API gateway monorepo",
    long_about = "Gantry generates a Cargo workspace for an API gateway: data-plane \
                  crates, control-plane services, contracts, a console stub, CI and \
                  developer tooling. Re-running is safe; existing files are never \
                  overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 gantry\n\
        \x20 gantry my-gateway --output-dir ~/src\n\
        \x20 gantry my-gateway --dry-run\n\
        \x20 gantry completions bash > ~/.local/share/bash-completion/completions/gantry",
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments of the default scaffold action.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,

    /// Auxiliary subcommand.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for the default scaffold action.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Name of the project directory to create.
    #[arg(
        value_name = "PROJECT_NAME",
        help = "Project name [default: edge-platform, or project.default_name from config]"
    )]
    pub project_name: Option<String>,

    /// Parent directory of the project.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory to create the project in"
    )]
    pub output_dir: PathBuf,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip version-control initialisation.
    #[arg(long = "no-vcs", help = "Do not initialise a git repository")]
    pub no_vcs: bool,

    /// Custom root manifest template.
    #[arg(
        long = "template",
        value_name = "FILE",
        help = "Root Cargo.toml template containing the '# @gantry:members' marker"
    )]
    pub template: Option<PathBuf>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gantry completions bash > ~/.local/share/bash-completion/completions/gantry\n\
            \x20 gantry completions zsh  > ~/.zfunc/_gantry\n\
            \x20 gantry completions fish > ~/.config/fish/completions/gantry.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Gantry configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gantry config show\n\
            \x20 gantry config path"
    )]
    Config(ConfigCommands),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gantry completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gantry config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the merged configuration as TOML.
    Show,
    /// Print the path of the configuration file in use.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
