use crate::domain::value_objects::{Orientation, Position};

/// A word committed to the grid. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub(crate) word: String,
    pub(crate) origin: Position,
    pub(crate) orientation: Orientation,
    pub(crate) clue: String,
}

impl Placement {
    pub fn new(
        word: impl Into<String>,
        origin: impl Into<Position>,
        orientation: Orientation,
        clue: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            origin: origin.into(),
            orientation,
            clue: clue.into(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub const fn origin(&self) -> Position {
        self.origin
    }

    pub const fn row(&self) -> usize {
        self.origin.row
    }

    pub const fn col(&self) -> usize {
        self.origin.col
    }

    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Occupied cells paired with their letters, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(|(i, ch)| (self.origin.advance(self.orientation, i), ch))
    }

    /// Cell just before the first letter, if inside the first quadrant.
    pub fn before(&self) -> Option<Position> {
        self.origin.retreat(self.orientation)
    }

    /// Cell just after the last letter (may lie outside the grid).
    pub fn after(&self) -> Position {
        self.origin.advance(self.orientation, self.len())
    }

    /// The cell this placement shares with `other`, if any.
    pub fn crossing(&self, other: &Placement) -> Option<Position> {
        self.cells()
            .map(|(pos, _)| pos)
            .find(|pos| other.cells().any(|(p, _)| p == *pos))
    }
}
