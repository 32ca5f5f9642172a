use crate::error::{PedError, Result};
use crate::error_helpers;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Copies untouched originals into a backup directory before in-place edits
pub struct BackupManager {
    backups_dir: PathBuf,
}

impl BackupManager {
    /// Create a BackupManager for `dir`, creating the directory if needed
    ///
    /// A path that exists but is not a directory is rejected.
    pub fn with_directory(dir: impl Into<PathBuf>) -> Result<Self> {
        let backups_dir = dir.into();

        if backups_dir.exists() && !backups_dir.is_dir() {
            return Err(PedError::io(format!(
                "Backup path is not a directory: '{}'",
                backups_dir.display()
            )));
        }

        fs::create_dir_all(&backups_dir).map_err(|e| {
            PedError::io(error_helpers::backup_dir_error(&backups_dir, &e))
        })?;

        Ok(Self { backups_dir })
    }

    /// Get the backup directory path
    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    /// Copy `file_path` into the backup directory under a unique name
    pub fn create_backup(&self, file_path: &Path) -> Result<PathBuf> {
        let file_name = file_path
            .file_name()
            .ok_or_else(|| PedError::io(format!("Invalid file name: {}", file_path.display())))?;

        // Millisecond timestamp first so names sort chronologically
        let id = format!(
            "{}-{}",
            Utc::now().format("%Y%m%d-%H%M%S%3f"),
            Uuid::new_v4().to_string().split_at(8).0
        );
        let backup_path = self
            .backups_dir
            .join(format!("{}.{}.bak", file_name.to_string_lossy(), id));

        fs::copy(file_path, &backup_path)
            .map_err(|e| error_helpers::io_failure(&backup_path, "writing backup", &e))?;

        tracing::info!(
            original = %file_path.display(),
            backup = %backup_path.display(),
            "created backup"
        );
        Ok(backup_path)
    }
}
