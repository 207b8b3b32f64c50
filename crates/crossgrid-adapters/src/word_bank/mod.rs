//! Word bank sources.
//!
//! Resolution order for the bank used by the CLI:
//!
//! 1. An explicit path (`--bank` flag or `bank.path` config key).
//! 2. **`$CROSSGRID_WORD_BANK`**: environment variable override.
//! 3. The built-in culture word list.

mod builtin;
mod file;

use std::path::{Path, PathBuf};

use tracing::debug;

use crossgrid_core::{application::ports::WordBankSource, domain::WordBank, error::CrosswordResult};

pub use builtin::{BUILTIN_ENTRIES, builtin_bank};
pub use file::FileWordBank;

/// Environment variable naming a bank file or directory.
pub const WORD_BANK_ENV: &str = "CROSSGRID_WORD_BANK";

/// A bank that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticWordBank {
    bank: WordBank,
    label: String,
}

impl StaticWordBank {
    pub fn new(bank: WordBank, label: impl Into<String>) -> Self {
        Self {
            bank,
            label: label.into(),
        }
    }

    /// The bundled word list.
    pub fn builtin() -> CrosswordResult<Self> {
        Ok(Self::new(builtin_bank()?, "built-in word list"))
    }
}

impl WordBankSource for StaticWordBank {
    fn load(&self) -> CrosswordResult<WordBank> {
        Ok(self.bank.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Pick the word bank source: explicit path, then the environment
/// override, then the built-in list.
pub fn resolve_source(explicit: Option<&Path>) -> CrosswordResult<Box<dyn WordBankSource>> {
    let from_env = std::env::var_os(WORD_BANK_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_from(explicit, from_env)
}

fn resolve_from(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
) -> CrosswordResult<Box<dyn WordBankSource>> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "Using word bank from explicit path");
        return Ok(Box::new(FileWordBank::new(path)));
    }
    if let Some(path) = from_env {
        debug!(path = %path.display(), env = WORD_BANK_ENV, "Using word bank from environment");
        return Ok(Box::new(FileWordBank::new(path)));
    }
    debug!("Using built-in word list");
    Ok(Box::new(StaticWordBank::builtin()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_environment() {
        let source = resolve_from(Some(Path::new("mine.toml")), Some("env.toml".into())).unwrap();
        assert!(source.describe().contains("mine.toml"));
    }

    #[test]
    fn environment_beats_builtin() {
        let source = resolve_from(None, Some("env.json".into())).unwrap();
        assert!(source.describe().contains("env.json"));
    }

    #[test]
    fn falls_back_to_builtin() {
        let source = resolve_from(None, None).unwrap();
        assert_eq!(source.describe(), "built-in word list");
        assert!(source.load().unwrap().contains("CHOPPLEGANGER"));
    }
}
