//! Configuration management for ped
//!
//! Defaults live in ~/.ped/config.toml (or the file named by `PED_CONFIG`).
//! Command-line flags are applied on top of these values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "PED_CONFIG";

const DEFAULT_CONFIG: &str = r#"# ped configuration file
# Command-line flags override the values below.

[matching]
# Case-insensitive matching (same as -i)
#ignore_case = false

# '.' matches newlines (same as -d)
#dot_all = false

# '^' and '$' match at line boundaries (same as -m)
#multiline = false

# '\s' only matches ASCII whitespace (same as -a)
#ascii = false

# Treat every pattern as a fixed string (same as -F)
#fixed = false

[output]
# Line ending used to join lines and terminate output
#line_ending = "\n"

# Terminate the input with a line ending before running commands (same as -n)
#normalize = false

# Never append a trailing line ending (same as -Z)
#no_eof = false

[backup]
# Copy the original file here before in-place edits (same as -b)
#backup_dir = "/path/to/backups"

[logging]
# Write debug logs to ~/.ped/ped.log (same as --debug)
#debug = false
"#;

/// ped configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub backup: BackupConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub ignore_case: bool,
    #[serde(default)]
    pub dot_all: bool,
    #[serde(default)]
    pub multiline: bool,
    #[serde(default)]
    pub ascii: bool,
    #[serde(default)]
    pub fixed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Line ending used for rendering
    #[serde(default = "default_line_ending")]
    pub line_ending: String,

    #[serde(default)]
    pub normalize: bool,

    #[serde(default)]
    pub no_eof: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_ending: default_line_ending(),
            normalize: false,
            no_eof: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Directory that receives a copy of the original before in-place edits
    #[serde(default)]
    pub backup_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub debug: bool,
}

fn default_line_ending() -> String {
    "\n".to_string()
}

/// Get the configuration file path
///
/// Returns `None` when neither `PED_CONFIG` nor a home directory is available.
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".ped").join("config.toml"))
}

/// Commented template with every option
pub fn default_config_content() -> &'static str {
    DEFAULT_CONFIG
}

/// Load configuration from the default location
///
/// A missing file yields defaults. A malformed or invalid file is reported
/// and defaults are used; the file itself is left untouched.
pub fn load_config() -> Config {
    let Some(path) = config_file_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
            eprintln!("Warning: ignoring config file {}: {:#}", path.display(), e);
            Config::default()
        }
    }
}

/// Load and validate configuration from a specific file
pub fn load_config_from(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    validate_config(&config)?;
    Ok(config)
}

/// Write the commented template to `path`, creating parent directories
pub fn save_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config file: {}", path.display()))?;
    Ok(())
}

/// Validate configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.output.line_ending.is_empty() {
        anyhow::bail!("Invalid line_ending: must not be empty");
    }

    if let Some(dir) = &config.backup.backup_dir {
        if dir.trim().is_empty() {
            anyhow::bail!("Invalid backup_dir: must not be empty when set");
        }
    }

    Ok(())
}
