//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;

use crossgrid_core::domain::{Orientation, Puzzle, PuzzleDocument};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` in config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable payload. Written even in quiet mode.
    pub fn data(&self, payload: &str) -> io::Result<()> {
        self.term.write_line(payload)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Puzzle rendering ──────────────────────────────────────────────────

    /// The bordered letter grid.
    pub fn grid(&self, puzzle: &Puzzle) -> io::Result<()> {
        self.print(&puzzle.to_string())
    }

    /// ACROSS then DOWN clue listing.
    pub fn clues(&self, document: &PuzzleDocument) -> io::Result<()> {
        for orientation in Orientation::ALL {
            self.header(&format!("\n{}", orientation.as_str().to_ascii_uppercase()))?;
            for line in clue_lines(document, orientation) {
                self.print(&line)?;
            }
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// `number. clue (length) [ANSWER]` for each word, in number order.
pub fn clue_lines(document: &PuzzleDocument, orientation: Orientation) -> Vec<String> {
    document
        .words
        .get(orientation)
        .iter()
        .map(|(number, entry)| {
            format!(
                "{number}. {} ({}) [{}]",
                entry.clue,
                entry.answer.chars().count(),
                entry.answer
            )
        })
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crossgrid_core::domain::export;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Human, // avoid TTY detection in tests
            log_file: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn document() -> PuzzleDocument {
        let mut puzzle = Puzzle::new(7).unwrap();
        puzzle.place("DUNE", "Desert epic", (2, 1), Orientation::Across).unwrap();
        puzzle.place("DAP", "Greeting", (2, 1), Orientation::Down).unwrap();
        puzzle.place("EPIC", "Grand", (2, 4), Orientation::Down).unwrap();
        export(&puzzle)
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
        assert!(out.data("{}").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = make_manager(false, false);
        let no_color = make_manager(false, true);
        assert!(!colored.no_color);
        assert!(no_color.no_color);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
            log_file: None,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args, &config);
        assert_eq!(out.format(), OutputFormat::Json);
        assert!(out.no_color);
    }

    #[test]
    fn clue_lines_follow_number_order() {
        let doc = document();
        assert_eq!(
            clue_lines(&doc, Orientation::Across),
            vec!["1. Desert epic (4) [DUNE]"]
        );
        assert_eq!(
            clue_lines(&doc, Orientation::Down),
            vec!["1. Greeting (3) [DAP]", "2. Grand (4) [EPIC]"]
        );
    }
}
