use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// Immutable catalog of candidate words, bucketed by length.
///
/// Invariant: every word sits in the bucket matching its character count,
/// and no bucket is empty. Buckets and words iterate in ascending order,
/// which keeps generation reproducible for a given random seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    buckets: BTreeMap<usize, BTreeMap<String, String>>,
    total: usize,
}

/// A single `(word, clue)` pair borrowed from a [`WordBank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry<'a> {
    pub word: &'a str,
    pub clue: &'a str,
}

impl WordEntry<'_> {
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl WordBank {
    pub fn builder() -> WordBankBuilder {
        WordBankBuilder::default()
    }

    /// Available word lengths, ascending.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    /// All words of exactly `length` characters.
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = WordEntry<'_>> {
        self.buckets
            .get(&length)
            .into_iter()
            .flat_map(|bucket| bucket.iter())
            .map(|(word, clue)| WordEntry { word, clue })
    }

    /// Number of words of exactly `length` characters.
    pub fn bucket_len(&self, length: usize) -> usize {
        self.buckets.get(&length).map_or(0, BTreeMap::len)
    }

    /// Look up the clue for `word`.
    pub fn clue(&self, word: &str) -> Option<&str> {
        self.buckets
            .get(&word.chars().count())
            .and_then(|bucket| bucket.get(word))
            .map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.clue(word).is_some()
    }

    /// The longest word. Ties go to the alphabetically first word.
    pub fn longest(&self) -> Option<WordEntry<'_>> {
        self.buckets
            .iter()
            .next_back()
            .and_then(|(_, bucket)| bucket.iter().next())
            .map(|(word, clue)| WordEntry { word, clue })
    }

    /// Every entry, shortest words first.
    pub fn entries(&self) -> impl Iterator<Item = WordEntry<'_>> {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.iter())
            .map(|(word, clue)| WordEntry { word, clue })
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Builder for [`WordBank`].
///
/// Words are trimmed and upper-cased; the length bucket is derived from
/// the word itself.
#[derive(Debug, Default, Clone)]
pub struct WordBankBuilder {
    buckets: BTreeMap<usize, BTreeMap<String, String>>,
}

impl WordBankBuilder {
    /// Add an entry, consuming and returning the builder.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidWord`] for empty words or words
    /// containing whitespace.
    pub fn entry(
        mut self,
        word: impl AsRef<str>,
        clue: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.insert(word, clue)?;
        Ok(self)
    }

    /// Add an entry. Returns `false` if the word was already present, in
    /// which case the existing clue is kept.
    pub fn insert(
        &mut self,
        word: impl AsRef<str>,
        clue: impl Into<String>,
    ) -> Result<bool, DomainError> {
        let word = normalize_word(word.as_ref())?;
        let bucket = self.buckets.entry(word.chars().count()).or_default();
        if bucket.contains_key(&word) {
            return Ok(false);
        }
        bucket.insert(word, clue.into());
        Ok(true)
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        self.buckets
            .get(&word.chars().count())
            .is_some_and(|bucket| bucket.contains_key(&word))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Errors
    /// Returns [`DomainError::EmptyWordBank`] when no entry was added.
    pub fn build(self) -> Result<WordBank, DomainError> {
        let total = self.len();
        if total == 0 {
            return Err(DomainError::EmptyWordBank);
        }
        Ok(WordBank {
            buckets: self.buckets,
            total,
        })
    }
}

fn normalize_word(raw: &str) -> Result<String, DomainError> {
    let word = raw.trim();
    if word.is_empty() {
        return Err(DomainError::InvalidWord {
            word: raw.to_string(),
            reason: "word is empty".into(),
        });
    }
    if word.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidWord {
            word: raw.to_string(),
            reason: "word contains whitespace".into(),
        });
    }
    Ok(word.to_uppercase())
}
