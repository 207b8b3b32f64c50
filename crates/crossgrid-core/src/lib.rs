//! crossgrid core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the crossgrid
//! crossword generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crossgrid-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (PuzzleService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: WordBankSource, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crossgrid-adapters (Infrastructure)  │
//! │  (FileWordBank, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (WordBank, Grid, PlacementSearch, ...)  │
//! │            No I/O                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crossgrid_core::domain::{WordBank, PlacementSearch, export};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let bank = WordBank::builder()
//!     .entry("CHOPPLEGANGER", "Shape-shifting double").unwrap()
//!     .entry("ROSE", "Climbing flower").unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut search = PlacementSearch::new(&bank, 15, StdRng::seed_from_u64(7)).unwrap();
//! let report = search.generate(10);
//! let document = export(search.puzzle());
//! println!("{} of {} words", report.placed, report.target);
//! println!("{}", document.to_json_pretty().unwrap());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, GeneratedPuzzle, PuzzleService,
        ports::{Filesystem, WordBankSource},
    };
    pub use crate::domain::{
        GenerationReport, Orientation, Placement, PlacementSearch, Position, Puzzle,
        PuzzleDocument, WordBank, export,
    };
    pub use crate::error::{CrosswordError, CrosswordResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
