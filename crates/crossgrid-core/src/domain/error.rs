// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Generation itself never fails: unplaceable words and budget exhaustion
/// are reported through the generation report. Only invalid construction
/// arguments and malformed data end up here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    #[error("Invalid grid size {size}: must be at least 1")]
    InvalidGridSize { size: usize },

    #[error("Word bank is empty")]
    EmptyWordBank,

    #[error("Invalid word '{word}': {reason}")]
    InvalidWord { word: String, reason: String },

    // ========================================================================
    // Data Errors
    // ========================================================================
    #[error("Invalid cell key '{key}': expected \"row,col\"")]
    InvalidCellKey { key: String },

    #[error("Unknown orientation '{0}'")]
    UnknownOrientation(String),

    #[error("Placement of '{word}' at ({row}, {col}) is outside the {size}x{size} grid")]
    PlacementOutOfBounds {
        word: String,
        row: usize,
        col: usize,
        size: usize,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidGridSize { .. } => vec![
                "Use a grid size of at least 1 (default: 15)".into(),
                "The size should be at least the length of the longest word".into(),
            ],
            Self::EmptyWordBank => vec![
                "The word bank has no entries".into(),
                "Check the bank file: it must map lengths to {WORD: clue} tables".into(),
                "Try: crossgrid bank to inspect the resolved bank".into(),
            ],
            Self::InvalidWord { word, .. } => vec![
                format!("Fix or remove the entry '{}'", word),
                "Words must be non-empty".into(),
            ],
            Self::InvalidCellKey { .. } => vec![
                "Cell keys in `numbers` must look like \"7,1\"".into(),
                "Regenerate the data file with: crossgrid generate".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidGridSize { .. }
            | Self::InvalidWord { .. }
            | Self::InvalidCellKey { .. }
            | Self::UnknownOrientation(_) => ErrorCategory::Validation,
            Self::EmptyWordBank => ErrorCategory::NotFound,
            Self::PlacementOutOfBounds { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
