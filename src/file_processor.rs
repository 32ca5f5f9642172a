//! I/O around the pipeline: read the source, write stdout or the file in place

use crate::backup_manager::BackupManager;
use crate::error::{PedError, Result};
use crate::error_helpers;
use crate::pipeline::{Pipeline, RenderOptions};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

/// Read the whole source into memory
pub fn read_source(source: &Source) -> Result<String> {
    match source {
        Source::Stdin => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| PedError::from_read_error(&e, "Failed to read standard input"))?;
            Ok(input)
        }
        Source::File(path) => read_file(path),
    }
}

/// Read a file as UTF-8 text
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            PedError::from_read_error(&e, format!("Failed to decode '{}'", path.display()))
        } else {
            error_helpers::io_failure(path, "reading", &e)
        }
    })
}

/// Replace `path` with `contents` atomically, keeping its permissions
///
/// A read-only target is refused before anything is written.
pub fn write_in_place(path: &Path, contents: &str) -> Result<()> {
    let metadata =
        fs::metadata(path).map_err(|e| error_helpers::io_failure(path, "inspecting", &e))?;
    if metadata.permissions().readonly() {
        return Err(PedError::io(error_helpers::permission_error(path, "writing")));
    }

    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    // Temp file in the same directory so the final rename stays atomic
    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .map_err(|e| error_helpers::io_failure(parent_dir, "creating a temp file in", &e))?;

    temp_file
        .write_all(contents.as_bytes())
        .and_then(|_| temp_file.flush())
        .map_err(|e| error_helpers::io_failure(temp_file.path(), "writing", &e))?;

    fs::set_permissions(temp_file.path(), metadata.permissions())
        .map_err(|e| error_helpers::io_failure(temp_file.path(), "setting permissions on", &e))?;

    temp_file
        .persist(path)
        .map_err(|e| error_helpers::io_failure(path, "writing", &e.error))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file in place");
    Ok(())
}

/// Runs a parsed pipeline over a source and renders the result
pub struct FileProcessor {
    pipeline: Pipeline,
    render: RenderOptions,
}

impl FileProcessor {
    pub fn new(pipeline: Pipeline, render: RenderOptions) -> Self {
        Self { pipeline, render }
    }

    /// Transform text already in memory
    pub fn process_text(&self, input: &str) -> String {
        self.pipeline.process(input, &self.render)
    }

    /// Read `source` and return the rendered output
    pub fn process_source(&self, source: &Source) -> Result<String> {
        let input = read_source(source)?;
        Ok(self.process_text(&input))
    }

    /// Transform `path` and write the result back to it
    ///
    /// When `backups` is given, the untouched original is copied there first.
    /// Returns the backup path, if one was made.
    pub fn apply_in_place(
        &self,
        path: &Path,
        backups: Option<&BackupManager>,
    ) -> Result<Option<PathBuf>> {
        let input = read_file(path)?;
        let output = self.process_text(&input);

        let backup_path = match backups {
            Some(manager) => Some(manager.create_backup(path)?),
            None => None,
        };

        write_in_place(path, &output)?;
        Ok(backup_path)
    }
}
