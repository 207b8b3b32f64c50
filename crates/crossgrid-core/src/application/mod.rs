//! Application layer for crossgrid.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PuzzleService)
//! - **Ports**: Interface definitions (traits) for word sources and storage
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! puzzle logic itself. All placement rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateOptions, GeneratedPuzzle, PuzzleService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, WordBankSource};

pub use error::ApplicationError;
