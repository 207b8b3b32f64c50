use std::fmt;

use crate::domain::{
    entities::{grid::Grid, placement::Placement},
    error::DomainError,
    validation::PlacementValidator,
    value_objects::{Orientation, Position},
};

/// The grid together with every word committed to it.
///
/// Grows monotonically: placements are only ever appended, and each
/// commit writes the whole word at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    placements: Vec<Placement>,
}

impl Puzzle {
    /// # Errors
    /// Returns [`DomainError::InvalidGridSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, DomainError> {
        Ok(Self {
            grid: Grid::new(size)?,
            placements: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn size(&self) -> usize {
        self.grid.size()
    }

    /// Placements in commit order; the first one is the seed.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn word_count(&self) -> usize {
        self.placements.len()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.placements.iter().any(|p| p.word == word)
    }

    /// Place `word` if the validator accepts it.
    ///
    /// This is the manual entry point for seeding a grid or building a
    /// fixed layout. It does not require an intersection, so a puzzle
    /// built only through `place` may be disconnected; generated puzzles
    /// go through [`crate::domain::PlacementSearch`], which only commits
    /// crossing words after the seed.
    ///
    /// Returns `Ok(false)` when the placement is illegal or the word is
    /// already on the grid.
    pub fn place(
        &mut self,
        word: &str,
        clue: &str,
        origin: impl Into<Position>,
        orientation: Orientation,
    ) -> Result<bool, DomainError> {
        let origin = origin.into();
        if self.contains_word(word)
            || !PlacementValidator::can_place(&self.grid, word, origin, orientation)
        {
            return Ok(false);
        }
        self.commit(Placement::new(word, origin, orientation, clue))?;
        Ok(true)
    }

    /// Write a placement to the grid and record it.
    ///
    /// Only the extent is checked here; letter conflicts are the
    /// validator's job and must be ruled out beforehand.
    pub(crate) fn commit(&mut self, placement: Placement) -> Result<(), DomainError> {
        let out_of_bounds = placement.is_empty()
            || placement
                .cells()
                .last()
                .is_none_or(|(pos, _)| !self.grid.contains(pos));
        if out_of_bounds {
            return Err(DomainError::PlacementOutOfBounds {
                word: placement.word.clone(),
                row: placement.row(),
                col: placement.col(),
                size: self.size(),
            });
        }

        self.grid
            .write(&placement.word, placement.origin, placement.orientation);
        self.placements.push(placement);
        Ok(())
    }

    /// Rebuild a grid from the placement list alone.
    ///
    /// For a consistent puzzle this equals [`Self::grid`].
    pub fn replay(&self) -> Result<Grid, DomainError> {
        let mut grid = Grid::new(self.size())?;
        for p in &self.placements {
            grid.write(&p.word, p.origin, p.orientation);
        }
        Ok(grid)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.fmt(f)
    }
}
