//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CROSSGRID__<SECTION>__<KEY>`
//! 3. Config file: `--config FILE`, otherwise the platform config file
//!    overlaid by `.crossgrid.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crossgrid_adapters::splice::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};
use crossgrid_core::domain::{DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_TARGET_WORDS};

use crate::error::{CliError, CliResult};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CROSSGRID";

/// Local config file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".crossgrid.toml";

/// Default document path.
pub const DEFAULT_OUTPUT_PATH: &str = "crossword-data.json";

/// Every key understood by `config get` / `config set`.
pub const KEYS: &[&str] = &[
    "generation.size",
    "generation.words",
    "generation.max_attempts",
    "generation.seed",
    "bank.path",
    "output.path",
    "output.no_color",
    "output.format",
    "splice.start_marker",
    "splice.end_marker",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Puzzle generation parameters.
    pub generation: GenerationConfig,
    /// Word bank location.
    pub bank: BankConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Marker pair used by `splice`.
    pub splice: SpliceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub size: usize,
    pub words: usize,
    pub max_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            words: DEFAULT_TARGET_WORDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// File or directory; the built-in list is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpliceConfig {
    pub start_marker: String,
    pub end_marker: String,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.into(),
            end_marker: DEFAULT_END_MARKER.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files, and the environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("failed to seed default configuration")?,
        );

        builder = match config_file {
            Some(path) => builder.add_source(toml_file(path).required(true)),
            None => builder
                .add_source(toml_file(&Self::config_path()).required(false))
                .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid by a single file, without environment overrides.
    ///
    /// Used by `config set` so env values are never written back to disk.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(toml_file(path).required(false))
            .build()
            .with_context(|| format!("failed to read {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Reject values the generator cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.generation.size == 0 {
            anyhow::bail!("generation.size must be at least 1");
        }
        if self.generation.max_attempts == 0 {
            anyhow::bail!("generation.max_attempts must be at least 1");
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crossgrid.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crossgrid", "crossgrid")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Render a single key as text.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let value = match key {
            "generation.size" => self.generation.size.to_string(),
            "generation.words" => self.generation.words.to_string(),
            "generation.max_attempts" => self.generation.max_attempts.to_string(),
            "generation.seed" => display_opt(self.generation.seed),
            "bank.path" => display_opt(self.bank.path.as_ref().map(|p| p.display())),
            "output.path" => self.output.path.display().to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "splice.start_marker" => self.splice.start_marker.clone(),
            "splice.end_marker" => self.splice.end_marker.clone(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Parse `value` into the field named by `key`.
    ///
    /// `none` (or an empty string) clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        let value = value.trim();
        match key {
            "generation.size" => self.generation.size = parse_positive(key, value)?,
            "generation.words" => self.generation.words = parse(key, value)?,
            "generation.max_attempts" => self.generation.max_attempts = parse_positive(key, value)?,
            "generation.seed" => {
                self.generation.seed = if is_none(value) {
                    None
                } else {
                    Some(parse(key, value)?)
                }
            }
            "bank.path" => {
                self.bank.path = (!is_none(value)).then(|| PathBuf::from(value));
            }
            "output.path" => self.output.path = PathBuf::from(value),
            "output.no_color" => self.output.no_color = parse(key, value)?,
            "output.format" => {
                <crate::cli::OutputFormat as clap::ValueEnum>::from_str(value, true)
                    .map_err(|_| invalid_value(key, value, "auto, human, plain or json"))?;
                self.output.format = value.to_ascii_lowercase();
            }
            "splice.start_marker" => self.splice.start_marker = non_empty(key, value)?,
            "splice.end_marker" => self.splice.end_marker = non_empty(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

fn display_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "none".into())
}

fn is_none(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("none")
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> CliResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| invalid_value(key, value, &e.to_string()))
}

fn parse_positive(key: &str, value: &str) -> CliResult<usize> {
    match parse::<usize>(key, value)? {
        0 => Err(invalid_value(key, value, "must be at least 1")),
        n => Ok(n),
    }
}

fn non_empty(key: &str, value: &str) -> CliResult<String> {
    if value.is_empty() {
        return Err(invalid_value(key, value, "must not be empty"));
    }
    Ok(value.to_string())
}

fn unknown_key(key: &str) -> CliError {
    CliError::UnknownConfigKey { key: key.into() }
}

fn invalid_value(key: &str, value: &str, reason: &str) -> CliError {
    CliError::InvalidInput {
        message: format!("'{value}' is not a valid value for {key}: {reason}"),
        source: None,
    }
}
