//! `crossgrid config`: read and write configuration values.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `set` edits the file named by `--config`, or the default config file.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    let file = config_file.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            output.data(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            set_value(&file, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", file.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&config.to_toml()?)?;
        }

        ConfigCommands::Path => {
            output.data(&file.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Update one key in `file`, creating the file from defaults if needed.
fn set_value(file: &Path, key: &str, value: &str) -> CliResult<()> {
    let mut stored = AppConfig::load_file(file).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })?;
    stored.set(key, value)?;

    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }
    std::fs::write(file, stored.to_toml()?)
        .with_cli_context(|| format!("Failed to write config to '{}'", file.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
