//! Infrastructure adapters for crossgrid.
//!
//! This crate implements the ports defined in `crossgrid-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod splice;
pub mod word_bank;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use splice::{DocumentSplicer, MarkerPair, SpliceOutcome};
pub use word_bank::{FileWordBank, StaticWordBank, WORD_BANK_ENV, resolve_source};
