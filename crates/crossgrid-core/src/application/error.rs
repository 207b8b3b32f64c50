//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not puzzle
//! logic. Puzzle rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A word bank source could not be read or parsed.
    #[error("Failed to load word bank from {source_name}: {reason}")]
    BankLoadFailed { source_name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file that must exist is missing.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Document could not be encoded or decoded.
    #[error("Serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// Splice marker missing from the target document.
    #[error("Marker '{marker}' not found in {path}")]
    MarkerNotFound { marker: String, path: PathBuf },

    /// Output file exists and overwriting was not requested.
    #[error("Output already exists at {path}")]
    OutputExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::BankLoadFailed { source_name, .. } => vec![
                format!("Check the word bank at: {}", source_name),
                "Bank files map lengths to tables: { \"4\": { \"DUNE\": \"clue\" } }".into(),
                "Omit --bank to use the built-in word list".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Generate one first with: crossgrid generate".into(),
            ],
            Self::SerializationFailed { .. } => vec![
                "The puzzle data file may be corrupt".into(),
                "Regenerate it with: crossgrid generate --force".into(),
            ],
            Self::MarkerNotFound { marker, .. } => vec![
                format!("Add the line '{}' to the target document", marker),
                "Or pass --start-marker / --end-marker to match the document".into(),
                "The target was left unchanged".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
                "Or choose a different path with --output".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BankLoadFailed { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::SerializationFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::FileNotFound { .. } | Self::MarkerNotFound { .. } => ErrorCategory::NotFound,
            Self::OutputExists { .. } => ErrorCategory::Validation,
        }
    }
}
