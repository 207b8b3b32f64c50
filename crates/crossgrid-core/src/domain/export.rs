//! Puzzle document export.
//!
//! Turns a finished [`Puzzle`] into the [`PuzzleDocument`] handed to
//! renderers. Field names of the serialized form are fixed; downstream
//! consumers read them verbatim.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
};

use crate::domain::{
    entities::{Cell, Puzzle},
    value_objects::{Orientation, Position},
};

/// Serialized puzzle: grid layout, clue numbering, and per-word metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDocument {
    pub width: usize,
    pub height: usize,
    /// `1` where a letter is present, `0` for blanks. Row-major.
    pub grid: Vec<Vec<u8>>,
    /// One-letter strings, `""` for blanks. Row-major.
    #[serde(rename = "gridLetters")]
    pub grid_letters: Vec<Vec<String>>,
    pub numbers: Numbering,
    pub words: Words,
}

/// Word entries keyed by clue number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Words {
    pub across: BTreeMap<u32, WordClue>,
    pub down: BTreeMap<u32, WordClue>,
}

impl Words {
    pub fn get(&self, orientation: Orientation) -> &BTreeMap<u32, WordClue> {
        match orientation {
            Orientation::Across => &self.across,
            Orientation::Down => &self.down,
        }
    }

    fn get_mut(&mut self, orientation: Orientation) -> &mut BTreeMap<u32, WordClue> {
        match orientation {
            Orientation::Across => &mut self.across,
            Orientation::Down => &mut self.down,
        }
    }

    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordClue {
    pub clue: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
}

/// Start cell → clue number, kept in numbering order.
///
/// Serializes as a JSON object keyed by `"row,col"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numbering(Vec<(Position, u32)>);

impl Numbering {
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.0.iter().find(|(p, _)| *p == pos).map(|(_, n)| *n)
    }

    /// Entries in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Numbering {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(pos, n)| (pos.to_string(), n)))
    }
}

impl<'de> Deserialize<'de> for Numbering {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumberingVisitor;

        impl<'de> Visitor<'de> for NumberingVisitor {
            type Value = Numbering;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of \"row,col\" keys to clue numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Numbering, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, number)) = map.next_entry::<String, u32>()? {
                    let pos = key.parse::<Position>().map_err(de::Error::custom)?;
                    entries.push((pos, number));
                }
                entries.sort_by_key(|&(pos, n)| (n, pos));
                Ok(Numbering(entries))
            }
        }

        deserializer.deserialize_map(NumberingVisitor)
    }
}

impl PuzzleDocument {
    /// Number of placed words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Stable, directly embeddable form (two-space indent).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl From<&Puzzle> for PuzzleDocument {
    fn from(puzzle: &Puzzle) -> Self {
        export(puzzle)
    }
}

/// Build the document for a finished puzzle.
///
/// Start cells are numbered 1, 2, ... in row-major order; an across and a
/// down word starting on the same cell share a number.
pub fn export(puzzle: &Puzzle) -> PuzzleDocument {
    let size = puzzle.size();

    let mut grid = Vec::with_capacity(size);
    let mut grid_letters = Vec::with_capacity(size);
    for row in puzzle.grid().rows() {
        grid.push(row.iter().map(|c| u8::from(!c.is_empty())).collect());
        grid_letters.push(
            row.iter()
                .map(|c| match c {
                    Cell::Letter(ch) => ch.to_string(),
                    Cell::Empty => String::new(),
                })
                .collect(),
        );
    }

    let mut starts: Vec<Position> = puzzle.placements().iter().map(|p| p.origin()).collect();
    starts.sort();
    starts.dedup();
    let numbers: HashMap<Position, u32> = starts.iter().copied().zip(1..).collect();

    let mut words = Words::default();
    for p in puzzle.placements() {
        let number = numbers[&p.origin()];
        words.get_mut(p.orientation()).insert(
            number,
            WordClue {
                clue: p.clue().to_string(),
                answer: p.word().to_string(),
                row: p.row(),
                col: p.col(),
            },
        );
    }

    PuzzleDocument {
        width: size,
        height: size,
        grid,
        grid_letters,
        numbers: Numbering(starts.into_iter().zip(1..).collect()),
        words,
    }
}
