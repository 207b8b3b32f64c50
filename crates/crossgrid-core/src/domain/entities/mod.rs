pub mod grid;
pub mod placement;
pub mod puzzle;
pub mod word_bank;

pub use crate::domain::DomainError;
pub use grid::{Cell, DEFAULT_GRID_SIZE, Grid};
pub use placement::Placement;
pub use puzzle::Puzzle;
pub use word_bank::{WordBank, WordBankBuilder, WordEntry};
