//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crossgrid-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::WordBank;
use crate::error::CrosswordResult;

/// Port for word bank loading.
///
/// Implemented by:
/// - `crossgrid_adapters::word_bank::StaticWordBank` (built-in list)
/// - `crossgrid_adapters::word_bank::FileWordBank` (TOML/JSON files)
pub trait WordBankSource: Send + Sync {
    /// Load the full catalog.
    fn load(&self) -> CrosswordResult<WordBank>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crossgrid_adapters::filesystem::LocalFilesystem` (production)
/// - `crossgrid_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> CrosswordResult<String>;

    /// Replace a file's content. Readers never observe a partial write.
    fn write_file(&self, path: &Path, content: &str) -> CrosswordResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CrosswordResult<()>;
}
