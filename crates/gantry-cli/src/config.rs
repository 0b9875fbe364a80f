//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ScaffoldOptions`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `GANTRY_*` environment variables, `__` between key segments
//!    (`GANTRY_PREFLIGHT__VCS_TOOL=jj`)
//! 3. Config file: `--config FILE`, else the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use gantry_core::application::ScaffoldOptions;

use crate::cli::DEFAULT_PROJECT_NAME;

const ENV_PREFIX: &str = "GANTRY";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub project: ProjectConfig,
    pub preflight: PreflightConfig,
    pub templates: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Used when no project name is passed on the command line.
    pub default_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreflightConfig {
    /// Every tool here must answer `--version` or nothing is written.
    pub required_tools: Vec<String>,
    /// Version-control command; an empty string disables repository init.
    pub vcs_tool: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Custom root manifest template; the built-in one is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_manifest: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_PROJECT_NAME.into(),
        }
    }
}

impl Default for PreflightConfig {
    fn default() -> Self {
        let options = ScaffoldOptions::default();
        Self {
            required_tools: options.required_tools,
            vcs_tool: options.vcs_tool.unwrap_or_default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the platform default is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
            }
            None => {
                if let Some(path) = Self::config_path() {
                    debug!(path = %path.display(), "Looking for default config file");
                    builder = builder.add_source(
                        File::from(path.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("preflight.required_tools")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize::<Self>()
            .context("Invalid configuration")?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "gantry", "gantry")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Core options for a run; `init_vcs` comes from the command line.
    pub fn scaffold_options(&self, init_vcs: bool) -> ScaffoldOptions {
        let vcs_tool = self.preflight.vcs_tool.trim();
        ScaffoldOptions {
            required_tools: self.preflight.required_tools.clone(),
            vcs_tool: (!vcs_tool.is_empty()).then(|| vcs_tool.to_string()),
            init_vcs,
        }
    }

    /// Template path from config, resolved against the config file's
    /// directory when relative.
    pub fn root_manifest_template(&self, config_file: Option<&Path>) -> Option<PathBuf> {
        let path = self.templates.root_manifest.as_ref()?;
        match config_file.and_then(Path::parent) {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            _ => Some(path.clone()),
        }
    }
}
