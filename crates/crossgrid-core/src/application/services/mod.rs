//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a puzzle" or "write its data file".

pub mod puzzle_service;

pub use puzzle_service::{GenerateOptions, GeneratedPuzzle, PuzzleService};
