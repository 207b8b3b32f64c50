//! Puzzle Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Load the word bank from its source
//! 2. Run the placement search with a seeded random source
//! 3. Export the puzzle document and write it through the filesystem port

use std::path::Path;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, WordBankSource},
    },
    domain::{
        DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_TARGET_WORDS, GenerationReport,
        PlacementSearch, Puzzle, PuzzleDocument, WordBank, export,
    },
    error::{CrosswordError, CrosswordResult},
};

/// Parameters for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub size: usize,
    /// Words to aim for, seed included.
    pub target_words: usize,
    pub max_attempts: usize,
    /// Random seed; drawn fresh when `None`.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            target_words: DEFAULT_TARGET_WORDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// Everything a generation run produced.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    pub puzzle: Puzzle,
    pub document: PuzzleDocument,
    pub report: GenerationReport,
    /// The seed actually used, so the run can be reproduced.
    pub seed: u64,
}

/// Main puzzle service.
///
/// Orchestrates bank loading, generation, and document persistence.
pub struct PuzzleService {
    bank: Box<dyn WordBankSource>,
    filesystem: Box<dyn Filesystem>,
}

impl PuzzleService {
    /// Create a new puzzle service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    ///
    /// use crossgrid_core::{
    ///     application::{
    ///         GenerateOptions, PuzzleService,
    ///         ports::{Filesystem, WordBankSource},
    ///     },
    ///     domain::WordBank,
    ///     error::CrosswordResult,
    /// };
    ///
    /// struct TwoWords;
    ///
    /// impl WordBankSource for TwoWords {
    ///     fn load(&self) -> CrosswordResult<WordBank> {
    ///         Ok(WordBank::builder()
    ///             .entry("DUNE", "Desert epic")?
    ///             .entry("ICE", "Frozen water")?
    ///             .build()?)
    ///     }
    ///
    ///     fn describe(&self) -> String {
    ///         "two words".into()
    ///     }
    /// }
    ///
    /// struct NoDisk;
    ///
    /// impl Filesystem for NoDisk {
    ///     fn read_to_string(&self, _: &Path) -> CrosswordResult<String> {
    ///         Ok(String::new())
    ///     }
    ///     fn write_file(&self, _: &Path, _: &str) -> CrosswordResult<()> {
    ///         Ok(())
    ///     }
    ///     fn exists(&self, _: &Path) -> bool {
    ///         false
    ///     }
    ///     fn create_dir_all(&self, _: &Path) -> CrosswordResult<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// fn main() -> CrosswordResult<()> {
    ///     let service = PuzzleService::new(Box::new(TwoWords), Box::new(NoDisk));
    ///     let generated = service.generate(&GenerateOptions::default())?;
    ///     service.write_document(&generated.document, Path::new("puzzle.json"), false)?;
    ///     Ok(())
    /// }
    /// ```
    pub fn new(bank: Box<dyn WordBankSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { bank, filesystem }
    }

    /// Where the words come from, for display.
    pub fn bank_source(&self) -> String {
        self.bank.describe()
    }

    pub fn load_bank(&self) -> CrosswordResult<WordBank> {
        let bank = self.bank.load()?;
        debug!(source = %self.bank.describe(), words = bank.len(), "Word bank loaded");
        Ok(bank)
    }

    /// Generate a puzzle from the configured word bank.
    #[instrument(
        skip_all,
        fields(
            size = options.size,
            target = options.target_words,
            bank = %self.bank.describe()
        )
    )]
    pub fn generate(&self, options: &GenerateOptions) -> CrosswordResult<GeneratedPuzzle> {
        let bank = self.load_bank()?;
        Self::generate_with(&bank, options)
    }

    /// Generate a puzzle from an already loaded bank.
    pub fn generate_with(
        bank: &WordBank,
        options: &GenerateOptions,
    ) -> CrosswordResult<GeneratedPuzzle> {
        let seed = options.seed.unwrap_or_else(rand::random);
        info!(seed, "Generating puzzle");

        let rng = StdRng::seed_from_u64(seed);
        let mut search =
            PlacementSearch::new(bank, options.size, rng)?.with_max_attempts(options.max_attempts);
        let report = search.generate(options.target_words);
        let puzzle = search.into_puzzle();
        let document = export(&puzzle);

        Ok(GeneratedPuzzle {
            puzzle,
            document,
            report,
            seed,
        })
    }

    /// Write a document as pretty JSON.
    ///
    /// Refuses to replace an existing file unless `overwrite` is set.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_document(
        &self,
        document: &PuzzleDocument,
        path: &Path,
        overwrite: bool,
    ) -> CrosswordResult<()> {
        if !overwrite && self.filesystem.exists(path) {
            return Err(ApplicationError::OutputExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }

        let mut json = document
            .to_json_pretty()
            .map_err(|e| ApplicationError::SerializationFailed {
                reason: e.to_string(),
            })?;
        json.push('\n');
        self.filesystem.write_file(path, &json)?;

        info!(words = document.word_count(), "Puzzle document written");
        Ok(())
    }

    /// Read a previously written document.
    pub fn read_document(&self, path: &Path) -> CrosswordResult<PuzzleDocument> {
        Self::load_document(self.filesystem.as_ref(), path)
    }

    /// Read a document through any filesystem; no word bank involved.
    pub fn load_document(
        filesystem: &dyn Filesystem,
        path: &Path,
    ) -> CrosswordResult<PuzzleDocument> {
        if !filesystem.exists(path) {
            return Err(ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let raw = filesystem.read_to_string(path)?;
        PuzzleDocument::from_json(&raw).map_err(|e| {
            CrosswordError::from(ApplicationError::SerializationFailed {
                reason: format!("{}: {}", path.display(), e),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use mockall::mock;

    use super::*;
    use crate::domain::{DomainError, Orientation};

    mock! {
        pub Bank {}
        impl WordBankSource for Bank {
            fn load(&self) -> CrosswordResult<WordBank>;
            fn describe(&self) -> String;
        }
    }

    mock! {
        pub Fs {}
        impl Filesystem for Fs {
            fn read_to_string(&self, path: &Path) -> CrosswordResult<String>;
            fn write_file(&self, path: &Path, content: &str) -> CrosswordResult<()>;
            fn exists(&self, path: &Path) -> bool;
            fn create_dir_all(&self, path: &Path) -> CrosswordResult<()>;
        }
    }

    fn sample_bank() -> WordBank {
        WordBank::builder()
            .entry("CHOPPLEGANGER", "Shape-shifter")
            .unwrap()
            .entry("ROSE", "Flower")
            .unwrap()
            .entry("GHOLA", "Clone")
            .unwrap()
            .entry("ORANGE", "Citrus")
            .unwrap()
            .build()
            .unwrap()
    }

    fn bank_source() -> MockBank {
        let mut bank = MockBank::new();
        bank.expect_load().returning(|| Ok(sample_bank()));
        bank.expect_describe().return_const("test bank".to_string());
        bank
    }

    fn seeded(seed: u64) -> GenerateOptions {
        GenerateOptions {
            seed: Some(seed),
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn generate_uses_bank_and_reports_seed() {
        let service = PuzzleService::new(Box::new(bank_source()), Box::new(MockFs::new()));
        let generated = service.generate(&seeded(11)).unwrap();

        assert_eq!(generated.seed, 11);
        assert!(generated.report.seed_placed);
        assert_eq!(generated.document.word_count(), generated.report.placed);
        let seed_word = &generated.puzzle.placements()[0];
        assert_eq!(seed_word.word(), "CHOPPLEGANGER");
        assert_eq!(seed_word.orientation(), Orientation::Across);
    }

    #[test]
    fn generate_is_reproducible_for_a_seed() {
        let service = PuzzleService::new(Box::new(bank_source()), Box::new(MockFs::new()));
        let a = service.generate(&seeded(99)).unwrap();
        let b = service.generate(&seeded(99)).unwrap();
        assert_eq!(a.document, b.document);
    }

    #[test]
    fn generate_propagates_bank_errors() {
        let mut bank = MockBank::new();
        bank.expect_load()
            .returning(|| Err(DomainError::EmptyWordBank.into()));
        bank.expect_describe().return_const("empty".to_string());

        let service = PuzzleService::new(Box::new(bank), Box::new(MockFs::new()));
        let err = service.generate(&GenerateOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CrosswordError::Domain(DomainError::EmptyWordBank)
        ));
    }

    #[test]
    fn zero_size_fails_fast() {
        let options = GenerateOptions {
            size: 0,
            ..seeded(1)
        };
        let err = PuzzleService::generate_with(&sample_bank(), &options).unwrap_err();
        assert!(matches!(
            err,
            CrosswordError::Domain(DomainError::InvalidGridSize { size: 0 })
        ));
    }

    #[test]
    fn write_document_writes_pretty_json() {
        let written = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFs::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("out"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(move |_, content| {
            *sink.lock().unwrap() = content.to_string();
            Ok(())
        });

        let service = PuzzleService::new(Box::new(bank_source()), Box::new(fs));
        let generated = service.generate(&seeded(5)).unwrap();
        service
            .write_document(&generated.document, Path::new("out/puzzle.json"), false)
            .unwrap();

        let content = written.lock().unwrap().clone();
        assert!(content.starts_with("{\n  \"width\": 15"));
        assert!(content.ends_with("}\n"));
        assert_eq!(
            PuzzleDocument::from_json(&content).unwrap(),
            generated.document
        );
    }

    #[test]
    fn write_document_refuses_to_overwrite() {
        let mut fs = MockFs::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().never();

        let service = PuzzleService::new(Box::new(bank_source()), Box::new(fs));
        let doc = export(&Puzzle::new(3).unwrap());
        let err = service
            .write_document(&doc, Path::new("puzzle.json"), false)
            .unwrap_err();
        assert!(matches!(
            err,
            CrosswordError::Application(ApplicationError::OutputExists { .. })
        ));
    }

    #[test]
    fn write_document_overwrites_when_forced() {
        let mut fs = MockFs::new();
        fs.expect_exists().never();
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = PuzzleService::new(Box::new(bank_source()), Box::new(fs));
        let doc = export(&Puzzle::new(3).unwrap());
        service
            .write_document(&doc, Path::new("puzzle.json"), true)
            .unwrap();
    }

    #[test]
    fn read_document_reports_missing_file() {
        let mut fs = MockFs::new();
        fs.expect_exists().returning(|_| false);

        let service = PuzzleService::new(Box::new(bank_source()), Box::new(fs));
        let err = service.read_document(Path::new("nope.json")).unwrap_err();
        assert!(matches!(
            err,
            CrosswordError::Application(ApplicationError::FileNotFound { .. })
        ));
    }

    #[test]
    fn load_document_needs_only_a_filesystem() {
        let json = export(&Puzzle::new(3).unwrap()).to_json_pretty().unwrap();
        let mut fs = MockFs::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(json.clone()));

        let doc = PuzzleService::load_document(&fs, Path::new("puzzle.json")).unwrap();
        assert_eq!(doc.width, 3);
        assert_eq!(doc.word_count(), 0);
    }

    #[test]
    fn read_document_rejects_malformed_json() {
        let mut fs = MockFs::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok("{ not json".to_string()));

        let service = PuzzleService::new(Box::new(bank_source()), Box::new(fs));
        let err = service.read_document(Path::new("bad.json")).unwrap_err();
        assert!(matches!(
            err,
            CrosswordError::Application(ApplicationError::SerializationFailed { .. })
        ));
    }
}
