use std::fmt;

use crate::domain::{
    error::DomainError,
    value_objects::{Orientation, Position},
};

/// Default side length of a generated grid.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Content of a single grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Letter(char),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(c) => Some(c),
            Self::Empty => None,
        }
    }
}

/// Fixed-size square matrix of [`Cell`]s, stored row-major.
///
/// Invariant: `cells.len() == runs.len() == size * size`, `size >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    /// Per cell, a bit for each orientation of word written through it.
    runs: Vec<u8>,
}

const fn run_bit(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::Across => 0b01,
        Orientation::Down => 0b10,
    }
}

impl Grid {
    /// # Errors
    /// Returns [`DomainError::InvalidGridSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::InvalidGridSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            runs: vec![0; size * size],
        })
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos)
            .then(|| self.cells[pos.row * self.size + pos.col])
    }

    /// `true` when `pos` is blank or lies outside the grid.
    pub fn is_vacant(&self, pos: Position) -> bool {
        self.get(pos).is_none_or(Cell::is_empty)
    }

    /// `true` when a word running along `orientation` already covers `pos`.
    pub fn is_covered(&self, pos: Position, orientation: Orientation) -> bool {
        self.contains(pos) && (self.runs[pos.row * self.size + pos.col] & run_bit(orientation)) != 0
    }

    /// Write `word` starting at `origin`. Callers must have validated the
    /// full extent; see [`crate::domain::Puzzle::commit`].
    pub(crate) fn write(&mut self, word: &str, origin: Position, orientation: Orientation) {
        for (offset, ch) in word.chars().enumerate() {
            let pos = origin.advance(orientation, offset);
            let idx = pos.row * self.size + pos.col;
            self.cells[idx] = Cell::Letter(ch);
            self.runs[idx] |= run_bit(orientation);
        }
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of letter cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl fmt::Display for Grid {
    /// Bordered letter grid, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.size * 2 + 3);
        writeln!(f, "{rule}")?;
        for row in self.rows() {
            let letters: Vec<String> = row
                .iter()
                .map(|c| c.letter().unwrap_or(' ').to_string())
                .collect();
            writeln!(f, "| {} |", letters.join(" "))?;
        }
        write!(f, "{rule}")
    }
}
