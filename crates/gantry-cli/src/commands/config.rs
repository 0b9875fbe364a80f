//! `gantry config`: inspect the merged configuration.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// Both subcommands write to stdout even in quiet mode; their output is the
/// whole point of running them.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let serialised = render(&config)?;
            output.json(&config)?;
            if output.format() != crate::cli::OutputFormat::Json {
                print!("{serialised}");
            }
        }

        ConfigCommands::Path => match config_file.or_else(AppConfig::config_path) {
            Some(path) => {
                println!("{}", path.display());
                if !path.exists() {
                    output.info("File does not exist; built-in defaults are in effect")?;
                }
            }
            None => {
                return Err(CliError::ConfigError {
                    message: "No configuration directory is available on this platform".into(),
                    source: None,
                });
            }
        },
    }

    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
