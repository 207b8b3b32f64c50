//! Integration tests for crossgrid-core: structural guarantees of generated
//! puzzles, checked across many random seeds.

use std::collections::{HashSet, VecDeque};

use crossgrid_core::{
    application::{GenerateOptions, PuzzleService},
    domain::{Cell, Orientation, Position, Puzzle, WordBank, export},
};

const SEEDS: std::ops::Range<u64> = 0..100;

fn culture_bank() -> WordBank {
    let entries = [
        ("CHOPPLEGANGER", "Shape-shifting double"),
        ("OPHELIA", "Drowned in a song"),
        ("TEMPEST", "Storm on stage"),
        ("SHOWGIRL", "Vegas headliner"),
        ("ORANGE", "Citrus named for its colour"),
        ("ARRAKIS", "Desert planet"),
        ("GHOLA", "Regrown clone"),
        ("OASIS", "Desert spring"),
        ("SPICE", "Must flow"),
        ("HONEY", "Sweet talk"),
        ("DUNE", "Sand hill"),
        ("ROSES", "Bouquet"),
        ("ROSE", "Climbing flower"),
        ("FAFO", "Play games, win prizes"),
        ("ELLA", "Jazz singer Fitzgerald"),
        ("NOON", "Midday"),
        ("OPAL", "Iridescent gem"),
        ("SAGA", "Long tale"),
        ("TEA", "Afternoon brew"),
        ("ICE", "Frozen water"),
        ("ERA", "Period of time"),
        ("ONE", "Single"),
        ("ART", "Gallery fare"),
        ("GO", "Board game with stones"),
        ("LA", "City of angels, briefly"),
        ("AF", "Very, in slang"),
    ];
    let mut builder = WordBank::builder();
    for (word, clue) in entries {
        builder.insert(word, clue).unwrap();
    }
    builder.build().unwrap()
}

fn generate(seed: u64) -> (Puzzle, crossgrid_core::domain::GenerationReport) {
    let options = GenerateOptions {
        seed: Some(seed),
        ..GenerateOptions::default()
    };
    let generated = PuzzleService::generate_with(&culture_bank(), &options).unwrap();
    (generated.puzzle, generated.report)
}

#[test]
fn placements_replay_to_the_same_grid() {
    for seed in SEEDS {
        let (puzzle, _) = generate(seed);
        assert_eq!(&puzzle.replay().unwrap(), puzzle.grid(), "seed {seed}");
    }
}

#[test]
fn placed_words_form_one_connected_component() {
    for seed in SEEDS {
        let (puzzle, _) = generate(seed);
        let placements = puzzle.placements();

        // Every later word crossed something already on the grid.
        for (i, p) in placements.iter().enumerate().skip(1) {
            assert!(
                placements[..i].iter().any(|q| p.crossing(q).is_some()),
                "seed {seed}: {} does not cross an earlier word",
                p.word()
            );
        }

        let mut seen = vec![false; placements.len()];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        while let Some(i) = queue.pop_front() {
            for (j, q) in placements.iter().enumerate() {
                if !seen[j] && placements[i].crossing(q).is_some() {
                    seen[j] = true;
                    queue.push_back(j);
                }
            }
        }
        assert!(seen.iter().all(|&s| s), "seed {seed}: disconnected puzzle");
    }
}

#[test]
fn no_word_is_placed_twice() {
    for seed in SEEDS {
        let (puzzle, _) = generate(seed);
        let words: HashSet<&str> = puzzle.placements().iter().map(|p| p.word()).collect();
        assert_eq!(words.len(), puzzle.word_count(), "seed {seed}");
    }
}

#[test]
fn words_are_isolated_at_both_ends() {
    for seed in SEEDS {
        let (puzzle, _) = generate(seed);
        let grid = puzzle.grid();
        for p in puzzle.placements() {
            assert!(
                p.before().is_none_or(|b| grid.is_vacant(b)),
                "seed {seed}: {} touches a letter before its start",
                p.word()
            );
            assert!(
                grid.is_vacant(p.after()),
                "seed {seed}: {} touches a letter after its end",
                p.word()
            );
        }
    }
}

#[test]
fn words_share_at_most_one_crossing_cell() {
    for seed in SEEDS {
        let (puzzle, _) = generate(seed);
        let placements = puzzle.placements();
        for (i, p) in placements.iter().enumerate() {
            for q in &placements[i + 1..] {
                let shared = p
                    .cells()
                    .filter(|(pos, _)| q.cells().any(|(other, _)| other == *pos))
                    .count();
                assert!(shared <= 1, "seed {seed}: {} overlaps {}", p.word(), q.word());
                if shared == 1 {
                    assert_ne!(
                        p.orientation(),
                        q.orientation(),
                        "seed {seed}: {} runs along {}",
                        q.word(),
                        p.word()
                    );
                }
            }
        }
    }
}

#[test]
fn document_lists_every_placed_word() {
    for seed in SEEDS {
        let (puzzle, _) = generate(seed);
        let doc = export(&puzzle);
        assert_eq!(doc.word_count(), puzzle.word_count(), "seed {seed}");
        for p in puzzle.placements() {
            let listed = doc
                .words
                .get(p.orientation())
                .values()
                .any(|w| w.answer == p.word());
            assert!(listed, "seed {seed}: {} missing from document", p.word());
        }
    }
}

#[test]
fn every_letter_belongs_to_a_placement() {
    for seed in SEEDS {
        let (puzzle, _) = generate(seed);
        let covered: HashSet<Position> = puzzle
            .placements()
            .iter()
            .flat_map(|p| p.cells().map(|(pos, _)| pos))
            .collect();
        assert_eq!(covered.len(), puzzle.grid().filled(), "seed {seed}");
    }
}

#[test]
fn numbers_follow_row_major_order() {
    for seed in SEEDS {
        let (puzzle, _) = generate(seed);
        let doc = export(&puzzle);
        let positions: Vec<Position> = doc.numbers.iter().map(|(pos, _)| pos).collect();
        let numbers: Vec<u32> = doc.numbers.iter().map(|(_, n)| n).collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "seed {seed}");
        assert_eq!(numbers, (1..=numbers.len() as u32).collect::<Vec<_>>());
    }
}

#[test]
fn attempts_never_exceed_budget() {
    let bank = culture_bank();
    for budget in [0, 1, 10, 250] {
        let options = GenerateOptions {
            target_words: 1000,
            max_attempts: budget,
            seed: Some(3),
            ..GenerateOptions::default()
        };
        let report = PuzzleService::generate_with(&bank, &options).unwrap().report;
        assert_eq!(report.attempts, budget);
        assert!(report.budget_exhausted());
    }
}

#[test]
fn same_seed_gives_same_document() {
    let a = export(&generate(1234).0);
    let b = export(&generate(1234).0);
    assert_eq!(a.to_json_pretty().unwrap(), b.to_json_pretty().unwrap());
}

#[test]
fn example_scenario_numbers_crossing_words() {
    let mut puzzle = Puzzle::new(15).unwrap();
    assert!(
        puzzle
            .place("CHOPPLEGANGER", "Shape-shifting double", (7, 1), Orientation::Across)
            .unwrap()
    );
    // The O of ROSE lands on the O at column 3.
    assert!(
        puzzle
            .place("ROSE", "Climbing flower", (6, 3), Orientation::Down)
            .unwrap()
    );

    let seed = &puzzle.placements()[0];
    let rose = &puzzle.placements()[1];
    assert_eq!(rose.crossing(seed), Some(Position::new(7, 3)));
    assert_eq!(
        puzzle.grid().get(Position::new(7, 3)),
        Some(Cell::Letter('O'))
    );
    let shared = seed
        .cells()
        .filter(|(pos, _)| rose.cells().any(|(q, _)| q == *pos))
        .count();
    assert_eq!(shared, 1);

    let doc = export(&puzzle);
    assert_eq!(doc.words.down[&1].answer, "ROSE");
    assert_eq!((doc.words.down[&1].row, doc.words.down[&1].col), (6, 3));
    assert_eq!(doc.words.across[&2].answer, "CHOPPLEGANGER");
    assert_eq!((doc.words.across[&2].row, doc.words.across[&2].col), (7, 1));
    assert_eq!(doc.numbers.get(Position::new(6, 3)), Some(1));
    assert_eq!(doc.numbers.get(Position::new(7, 1)), Some(2));
}
