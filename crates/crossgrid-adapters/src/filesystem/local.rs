//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crossgrid_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CrosswordError, CrosswordResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Writes go to a uniquely named sibling file first and are renamed into
/// place, so a reader sees either the old content or the new, never a mix.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> CrosswordResult<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "read file"),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> CrosswordResult<()> {
        let staging = staging_path(path);
        std::fs::write(&staging, content).map_err(|e| map_io_error(&staging, e, "write file"))?;

        if let Err(e) = std::fs::rename(&staging, path) {
            let _ = std::fs::remove_file(&staging);
            return Err(map_io_error(path, e, "replace file"));
        }
        debug!(path = %path.display(), bytes = content.len(), "File written");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> CrosswordResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }
}

/// `dir/.name.<uuid>.tmp` next to the destination, so the rename stays on
/// one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CrosswordError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
