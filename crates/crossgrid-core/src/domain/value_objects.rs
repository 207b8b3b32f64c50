//! Small value types shared across the domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Placement axis of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Orientation {
    /// Both orientations in scan preference order.
    pub const ALL: [Orientation; 2] = [Orientation::Across, Orientation::Down];

    /// The other axis.
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Unit step `(d_row, d_col)` along this axis.
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Across => "across",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "across" | "a" | "h" => Ok(Self::Across),
            "down" | "d" | "v" => Ok(Self::Down),
            _ => Err(DomainError::UnknownOrientation(s.to_string())),
        }
    }
}

/// A `(row, col)` cell address. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position `offset` cells further along `orientation`.
    pub const fn advance(self, orientation: Orientation, offset: usize) -> Self {
        let (dr, dc) = orientation.step();
        Self {
            row: self.row + dr * offset,
            col: self.col + dc * offset,
        }
    }

    /// The position one cell back along `orientation`, if any.
    pub fn retreat(self, orientation: Orientation) -> Option<Self> {
        match orientation {
            Orientation::Across => self.col.checked_sub(1).map(|col| Self { col, ..self }),
            Orientation::Down => self.row.checked_sub(1).map(|row| Self { row, ..self }),
        }
    }
}

impl fmt::Display for Position {
    /// Renders the `"row,col"` key used by the puzzle document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidCellKey { key: s.to_string() };
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
