//! Error helper functions for creating actionable I/O error messages

use crate::error::PedError;
use std::io;
use std::path::Path;

/// Check if an IO error is a permission denied error
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Check if an IO error is a "not found" error
pub fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// Create an enhanced error message for file permission issues
pub fn permission_error(path: &Path, operation: &str) -> String {
    format!(
        "Permission denied when {} '{}'\n\n\
         Possible fixes:\n\
         1. Check file permissions: ls -l '{}'\n\
         2. Ensure write access with: chmod u+w '{}'\n\
         3. Choose a different --backup-path if the backup directory is read-only",
        operation,
        path.display(),
        path.display(),
        path.display()
    )
}

/// Create an enhanced error message for file not found issues
pub fn not_found_error(path: &Path, operation: &str) -> String {
    format!(
        "File not found when {} '{}'\n\n\
         Possible fixes:\n\
         1. Check the file path is correct\n\
         2. Use an absolute path if the relative path is ambiguous",
        operation,
        path.display()
    )
}

/// Create an enhanced error message for an unusable backup directory
pub fn backup_dir_error(path: &Path, underlying_err: &io::Error) -> String {
    let base = format!("Cannot use backup directory: '{}'", path.display());

    if is_permission_denied(underlying_err) {
        format!(
            "{}\n\n\
             Cause: Permission denied\n\n\
             Possible fixes:\n\
             1. Check write permissions on the directory and its parent\n\
             2. Use --backup-path to specify a different location",
            base
        )
    } else {
        format!("{}\n\nUnderlying error: {}", base, underlying_err)
    }
}

/// Build an I/O [`PedError`] for `operation` on `path`
pub fn io_failure(path: &Path, operation: &str, err: &io::Error) -> PedError {
    let message = if is_permission_denied(err) {
        permission_error(path, operation)
    } else if is_not_found(err) {
        not_found_error(path, operation)
    } else {
        format!("Failed {} '{}': {}", operation, path.display(), err)
    };
    PedError::io(message)
}
