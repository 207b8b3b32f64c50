//! Randomized first-fit placement search.
//!
//! The search seeds the grid with the longest word, then repeatedly draws a
//! random word and commits it at the first legal slot that crosses an
//! existing word. It stops when the target word count is reached or the
//! attempt budget runs out, whichever comes first. Running out of budget is
//! a normal outcome, reported through [`GenerationReport`].

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, info, instrument, trace, warn};

use crate::domain::{
    entities::{Placement, Puzzle, WordBank, WordEntry},
    error::DomainError,
    validation::PlacementValidator,
    value_objects::{Orientation, Position},
};

/// Default number of trial words before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 2000;

/// Default number of words to aim for, seed included.
pub const DEFAULT_TARGET_WORDS: usize = 15;

/// Outcome of a [`PlacementSearch::generate`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Requested word count.
    pub target: usize,
    /// Words on the grid when the run stopped, seed included.
    pub placed: usize,
    /// Trial words drawn.
    pub attempts: usize,
    pub max_attempts: usize,
    /// Whether the longest word fit and anchors the grid.
    pub seed_placed: bool,
    /// Trials that drew a word already on the grid.
    pub duplicate_skips: usize,
    /// Trials whose word had no legal crossing slot.
    pub unplaceable: usize,
}

impl GenerationReport {
    pub fn reached_target(&self) -> bool {
        self.placed >= self.target
    }

    pub fn budget_exhausted(&self) -> bool {
        !self.reached_target() && self.attempts >= self.max_attempts
    }
}

/// Grows a [`Puzzle`] from a [`WordBank`] using an injected random source.
pub struct PlacementSearch<'a, R> {
    bank: &'a WordBank,
    lengths: Vec<usize>,
    puzzle: Puzzle,
    rng: R,
    max_attempts: usize,
    seed_attempted: bool,
    seed_placed: bool,
}

impl<'a, R: Rng> PlacementSearch<'a, R> {
    /// Create a search over an empty `size`×`size` grid.
    ///
    /// # Errors
    /// [`DomainError::InvalidGridSize`] for a zero size,
    /// [`DomainError::EmptyWordBank`] for an empty bank.
    pub fn new(bank: &'a WordBank, size: usize, rng: R) -> Result<Self, DomainError> {
        if bank.is_empty() {
            return Err(DomainError::EmptyWordBank);
        }
        Ok(Self {
            bank,
            lengths: bank.lengths().collect(),
            puzzle: Puzzle::new(size)?,
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed_attempted: false,
            seed_placed: false,
        })
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }

    /// Place the longest word across the middle row, centred.
    ///
    /// Runs at most once per search. Returns whether the grid is anchored
    /// by a seed word.
    pub fn place_seed(&mut self) -> bool {
        if self.seed_attempted {
            return self.seed_placed;
        }
        self.seed_attempted = true;

        let Some(seed) = self.bank.longest() else {
            return false;
        };
        let size = self.puzzle.size();
        let len = seed.len();
        if len > size {
            debug!(word = seed.word, len, size, "seed word does not fit, starting empty");
            return false;
        }

        let origin = Position::new(size / 2, (size - len) / 2);
        self.seed_placed = self
            .puzzle
            .place(seed.word, seed.clue, origin, Orientation::Across)
            .unwrap_or(false);
        if self.seed_placed {
            debug!(word = seed.word, %origin, "seed placed");
        }
        self.seed_placed
    }

    /// Run trials until `target` words are placed or the budget is spent.
    #[instrument(skip(self), fields(size = self.puzzle.size(), max_attempts = self.max_attempts))]
    pub fn generate(&mut self, target: usize) -> GenerationReport {
        let seed_placed = self.place_seed();
        let mut report = GenerationReport {
            target,
            max_attempts: self.max_attempts,
            seed_placed,
            ..GenerationReport::default()
        };

        let size = self.puzzle.size();
        let mut rows: Vec<usize> = (0..size).collect();
        let mut cols: Vec<usize> = (0..size).collect();

        while self.puzzle.word_count() < target && report.attempts < self.max_attempts {
            report.attempts += 1;

            let Some(entry) = self.pick_word() else {
                break;
            };
            if self.puzzle.contains_word(entry.word) {
                report.duplicate_skips += 1;
                trace!(word = entry.word, "already placed");
                continue;
            }

            rows.shuffle(&mut self.rng);
            cols.shuffle(&mut self.rng);

            let Some((origin, orientation)) = self.find_slot(entry.word, &rows, &cols) else {
                report.unplaceable += 1;
                trace!(word = entry.word, "no crossing slot");
                continue;
            };

            match self
                .puzzle
                .commit(Placement::new(entry.word, origin, orientation, entry.clue))
            {
                Ok(()) => debug!(
                    word = entry.word,
                    %origin,
                    %orientation,
                    attempt = report.attempts,
                    "word placed"
                ),
                Err(e) => {
                    warn!(error = %e, "validated placement failed to commit");
                    report.unplaceable += 1;
                }
            }
        }

        report.placed = self.puzzle.word_count();
        info!(
            placed = report.placed,
            target = report.target,
            attempts = report.attempts,
            "generation finished"
        );
        report
    }

    /// First slot in scan order where `word` is legal and crosses an
    /// existing word. Across is tried before down at each cell.
    pub fn find_slot(
        &self,
        word: &str,
        rows: &[usize],
        cols: &[usize],
    ) -> Option<(Position, Orientation)> {
        let grid = self.puzzle.grid();
        rows.iter()
            .flat_map(|&row| cols.iter().map(move |&col| Position::new(row, col)))
            .find_map(|origin| {
                Orientation::ALL
                    .into_iter()
                    .find(|&o| PlacementValidator::accepts_crossing(grid, word, origin, o))
                    .map(|o| (origin, o))
            })
    }

    /// Uniform length, then a uniform word within that length.
    fn pick_word(&mut self) -> Option<WordEntry<'a>> {
        let bank = self.bank;
        let length = *self.lengths.choose(&mut self.rng)?;
        let count = bank.bucket_len(length);
        if count == 0 {
            return None;
        }
        let index = self.rng.gen_range(0..count);
        bank.words_of_length(length).nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn bank(entries: &[(&str, &str)]) -> WordBank {
        let mut builder = WordBank::builder();
        for (word, clue) in entries {
            builder.insert(word, *clue).unwrap();
        }
        builder.build().unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn seed_is_centred_across() {
        let bank = bank(&[("CHOPPLEGANGER", "seed"), ("ROSE", "r")]);
        let mut search = PlacementSearch::new(&bank, 15, rng()).unwrap();
        assert!(search.place_seed());

        let seed = &search.puzzle().placements()[0];
        assert_eq!(seed.word(), "CHOPPLEGANGER");
        assert_eq!(seed.origin(), Position::new(7, 1));
        assert_eq!(seed.orientation(), Orientation::Across);
    }

    #[test]
    fn oversized_seed_leaves_grid_empty() {
        let bank = bank(&[("CHOPPLEGANGER", "seed"), ("ROSE", "r")]);
        let mut search = PlacementSearch::new(&bank, 5, rng()).unwrap();
        let report = search.generate(3);

        assert!(!report.seed_placed);
        assert_eq!(report.placed, 0);
        assert_eq!(report.attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(report.budget_exhausted());
    }

    #[test]
    fn seed_counts_toward_target() {
        let bank = bank(&[("DUNE", "d"), ("ICE", "i")]);
        let mut search = PlacementSearch::new(&bank, 9, rng()).unwrap();
        let report = search.generate(1);

        assert_eq!(report.placed, 1);
        assert_eq!(report.attempts, 0);
        assert!(report.reached_target());
    }

    #[test]
    fn seed_is_placed_once() {
        let bank = bank(&[("DUNE", "d"), ("ICE", "i")]);
        let mut search = PlacementSearch::new(&bank, 9, rng()).unwrap();
        assert!(search.place_seed());
        assert!(search.place_seed());
        assert_eq!(search.puzzle().word_count(), 1);
    }

    #[test]
    fn attempt_budget_is_respected() {
        // Nothing can cross XYZW, so every trial fails.
        let bank = bank(&[("XYZW", "x"), ("AB", "a"), ("CD", "c")]);
        let mut search = PlacementSearch::new(&bank, 9, rng())
            .unwrap()
            .with_max_attempts(50);
        let report = search.generate(10);

        assert_eq!(report.attempts, 50);
        assert_eq!(report.placed, 1);
        assert_eq!(report.duplicate_skips + report.unplaceable, 50);
    }

    #[test]
    fn find_slot_is_first_fit_in_scan_order() {
        // DUNE across at row 4, cols 2..=5 in a 9x9 grid.
        let bank = bank(&[("DUNE", "d"), ("ICE", "i"), ("NAN", "n")]);
        let mut search = PlacementSearch::new(&bank, 9, rng()).unwrap();
        assert!(search.place_seed());
        assert_eq!(search.puzzle().placements()[0].origin(), Position::new(4, 2));

        // NAN can cross N at (4,4) either starting there or ending there.
        let forward: Vec<usize> = (0..9).collect();
        let backward: Vec<usize> = (0..9).rev().collect();

        assert_eq!(
            search.find_slot("NAN", &forward, &forward),
            Some((Position::new(2, 4), Orientation::Down))
        );
        assert_eq!(
            search.find_slot("NAN", &backward, &forward),
            Some((Position::new(4, 4), Orientation::Down))
        );
    }

    #[test]
    fn find_slot_prefers_across_at_same_cell() {
        let bank = bank(&[("DUNE", "d"), ("ADD", "a"), ("LID", "l")]);
        let mut search = PlacementSearch::new(&bank, 9, rng()).unwrap();
        assert!(search.place_seed());
        // ADD down at col 4 ends with D at (2,4); DUNE has D at (4,2).
        assert!(
            search
                .puzzle
                .place("ADD", "a", (0, 4), Orientation::Down)
                .unwrap()
        );

        // From (2,2) LID crosses ADD going across and DUNE going down.
        assert_eq!(
            search.find_slot("LID", &[2], &[2]),
            Some((Position::new(2, 2), Orientation::Across))
        );
    }

    #[test]
    fn same_seed_same_puzzle() {
        let entries = [
            ("CHOPPLEGANGER", "seed"),
            ("ROSE", "r"),
            ("DUNE", "d"),
            ("ICE", "i"),
            ("OPHELIA", "o"),
            ("GHOLA", "g"),
            ("ELLA", "e"),
        ];
        let bank = bank(&entries);
        let run = |seed| {
            let mut search =
                PlacementSearch::new(&bank, 15, StdRng::seed_from_u64(seed)).unwrap();
            search.generate(6);
            search.into_puzzle()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn zero_size_is_rejected() {
        let bank = bank(&[("ICE", "i")]);
        assert!(matches!(
            PlacementSearch::new(&bank, 0, rng()),
            Err(DomainError::InvalidGridSize { size: 0 })
        ));
    }
}
