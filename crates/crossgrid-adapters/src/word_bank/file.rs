//! File-backed word banks.
//!
//! A bank file maps a word length to a table of words and clues:
//!
//! ```toml
//! [4]
//! DUNE = "Villeneuve's 2026 sci-fi epic"
//! ROSE = "The Black Label K-pop artist"
//!
//! [13]
//! CHOPPLEGANGER = "TikTok term for an 'ugly' lookalike"
//! ```
//!
//! The same shape is accepted as JSON (`{"4": {"DUNE": "..."}}`). The
//! declared length is advisory: each word lands in the bucket of its real
//! length, and a mismatch is logged.
//!
//! A directory is walked recursively; every `.toml` and `.json` file in it
//! is merged in path order. Files that fail to load are skipped with a
//! warning so one bad file does not hide the rest.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crossgrid_core::{
    application::{ApplicationError, ports::WordBankSource},
    domain::{WordBank, WordBankBuilder},
    error::{CrosswordError, CrosswordResult},
};

// ── File format ───────────────────────────────────────────────────────────────

/// Deserialised bank file: length key → word → clue.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct BankFile(BTreeMap<String, BTreeMap<String, String>>);

#[derive(Debug, Error)]
enum BankFileError {
    #[error("failed to read: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported extension (expected .toml or .json)")]
    UnsupportedExtension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn parse_file(path: &Path) -> Result<BankFile, BankFileError> {
    let format = Format::of(path).ok_or(BankFileError::UnsupportedExtension)?;
    let raw = fs::read_to_string(path)?;
    Ok(match format {
        Format::Toml => toml::from_str(&raw)?,
        Format::Json => serde_json::from_str(&raw)?,
    })
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`WordBank`] from a bank file or a directory of bank files.
#[derive(Debug, Clone)]
pub struct FileWordBank {
    path: PathBuf,
}

impl FileWordBank {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_failed(&self, reason: impl Into<String>) -> CrosswordError {
        ApplicationError::BankLoadFailed {
            source_name: self.path.display().to_string(),
            reason: reason.into(),
        }
        .into()
    }

    /// Merge every bank file under the directory; bad files are skipped.
    fn load_dir(&self) -> CrosswordResult<WordBank> {
        let mut builder = WordBank::builder();
        let mut loaded = 0usize;

        let files = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && Format::of(entry.path()).is_some());

        for entry in files {
            let path = entry.path();
            match load_file(path) {
                Ok(file_bank) => {
                    merge(&mut builder, &file_bank, path)?;
                    loaded += 1;
                }
                Err(e) => warn!(
                    file = %path.display(),
                    error = %e,
                    "skipping word bank file due to load error"
                ),
            }
        }

        if loaded == 0 {
            return Err(self.load_failed("no loadable .toml or .json bank files found"));
        }
        debug!(files = loaded, words = builder.len(), "finished loading word bank directory");
        Ok(builder.build()?)
    }
}

impl WordBankSource for FileWordBank {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> CrosswordResult<WordBank> {
        if !self.path.exists() {
            return Err(self.load_failed("path does not exist"));
        }
        if self.path.is_dir() {
            return self.load_dir();
        }
        load_file(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load one file into its own bank so a bad entry rejects the whole file.
fn load_file(path: &Path) -> CrosswordResult<WordBank> {
    let BankFile(buckets) = parse_file(path).map_err(|e| ApplicationError::BankLoadFailed {
        source_name: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut builder = WordBank::builder();
    for (key, words) in &buckets {
        let declared = key.trim().parse::<usize>().ok();
        if declared.is_none() {
            warn!(file = %path.display(), key = %key, "length key is not a number");
        }
        for (word, clue) in words {
            let actual = word.trim().chars().count();
            if let Some(declared) = declared.filter(|&d| d != actual) {
                warn!(
                    file = %path.display(),
                    word = %word,
                    declared,
                    actual,
                    "word filed under the wrong length, re-bucketing"
                );
            }
            if !builder.insert(word, clue.as_str())? {
                debug!(word = %word, "duplicate word in file, keeping first clue");
            }
        }
    }
    Ok(builder.build()?)
}

fn merge(builder: &mut WordBankBuilder, bank: &WordBank, origin: &Path) -> CrosswordResult<()> {
    for entry in bank.entries() {
        if !builder.insert(entry.word, entry.clue)? {
            debug!(
                word = entry.word,
                file = %origin.display(),
                "word already loaded from an earlier file, keeping first clue"
            );
        }
    }
    Ok(())
}
