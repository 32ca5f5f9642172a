//! Debug logging support for ped
//!
//! When debug mode is enabled, parsing and execution are logged to
//! ~/.ped/ped.log. The filter defaults to `ped=debug` and can be replaced
//! through the `PED_LOG` environment variable.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "PED_LOG";

const DEFAULT_FILTER: &str = "ped=debug";

/// Initialize the debug logging system
///
/// Returns the path to the log file, or None if logging is not enabled or
/// the log file could not be set up. Only installing the subscriber itself
/// can fail.
pub fn init_debug_logging(debug_enabled: bool) -> Result<Option<PathBuf>> {
    if !debug_enabled {
        return Ok(None);
    }

    let opened = get_log_path().and_then(|path| open_log_file(&path).map(|file| (path, file)));

    match opened {
        Ok((log_path, log_file)) => {
            let subscriber = registry()
                .with(
                    fmt::layer()
                        .with_writer(log_file)
                        .with_ansi(false)
                        .with_target(false)
                        .with_thread_ids(false),
                )
                .with(build_filter());

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

            Ok(Some(log_path))
        }
        Err(e) => {
            // Logging is optional; keep going without it.
            eprintln!("Warning: Could not create log file: {:#}", e);
            Ok(None)
        }
    }
}

/// Create the log directory if needed and open the log file for appending
fn open_log_file(log_path: &Path) -> Result<File> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))
}

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Get the log file path: ~/.ped/ped.log
fn get_log_path() -> Result<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home_dir.join(".ped").join("ped.log"))
}
