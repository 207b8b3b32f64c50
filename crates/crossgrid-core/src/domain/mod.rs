// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crossgrid.
//!
//! Pure puzzle logic: the word bank, the grid, placement rules, the
//! randomized search, and document export. Nothing here touches the
//! filesystem; word sources and writers are ports in the application layer.
//!
//! - **No I/O**: randomness is injected as an [`rand::Rng`]
//! - **Monotonic growth**: placements are appended, never removed
//! - **Value semantics**: entities are `Clone + PartialEq`
pub mod entities;
pub mod error;
pub mod export;
pub mod search;
pub mod validation;
pub mod value_objects;

pub use entities::{
    Cell, DEFAULT_GRID_SIZE, Grid, Placement, Puzzle, WordBank, WordBankBuilder, WordEntry,
};
pub use error::{DomainError, ErrorCategory};
pub use export::{Numbering, PuzzleDocument, WordClue, Words, export};
pub use search::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TARGET_WORDS, GenerationReport, PlacementSearch};
pub use validation::PlacementValidator;
pub use value_objects::{Orientation, Position};

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn bank() -> WordBank {
        let mut builder = WordBank::builder();
        for (word, clue) in [
            ("CHOPPLEGANGER", "Shape-shifting doppelganger"),
            ("ROSE", "Flower on the trellis"),
            ("ORANGE", "Citrus with a colour name"),
            ("GHOLA", "Regrown clone"),
            ("NOON", "Midday"),
        ] {
            builder.insert(word, clue).unwrap();
        }
        builder.build().unwrap()
    }

    // ========================================================================
    // Search → Export
    // ========================================================================

    #[test]
    fn generated_puzzle_exports_every_word() {
        let bank = bank();
        let mut search = PlacementSearch::new(&bank, 15, StdRng::seed_from_u64(3)).unwrap();
        let report = search.generate(4);
        let puzzle = search.into_puzzle();

        let doc = export(&puzzle);
        assert_eq!(doc.word_count(), report.placed);
        assert_eq!(doc.numbers.len(), {
            let mut starts: Vec<_> = puzzle.placements().iter().map(|p| p.origin()).collect();
            starts.sort();
            starts.dedup();
            starts.len()
        });
        for p in puzzle.placements() {
            let number = doc.numbers.get(p.origin()).unwrap();
            let entry = &doc.words.get(p.orientation())[&number];
            assert_eq!(entry.answer, p.word());
            assert_eq!(entry.clue, bank.clue(p.word()).unwrap());
        }
    }

    #[test]
    fn seed_anchors_middle_row() {
        let bank = bank();
        let mut search = PlacementSearch::new(&bank, 15, StdRng::seed_from_u64(0)).unwrap();
        search.generate(1);
        let doc = export(search.puzzle());

        assert_eq!(doc.words.across.len(), 1);
        let seed = doc.words.across.values().next().unwrap();
        assert_eq!((seed.answer.as_str(), seed.row, seed.col), ("CHOPPLEGANGER", 7, 1));
        assert_eq!(doc.grid_letters[7][1], "C");
        assert_eq!(doc.grid_letters[7][0], "");
    }
}
