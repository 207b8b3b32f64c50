//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crossgrid",
    bin_name = "crossgrid",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Randomized crossword grid generator",
    long_about = "crossgrid lays words from a word bank onto a square grid, \
                  numbers the clues, and writes a puzzle document that web \
                  front-ends can embed.",
    after_help = "EXAMPLES:\n\
        \x20 crossgrid generate\n\
        \x20 crossgrid generate --size 11 --words 12 --seed 42 -o puzzle.json\n\
        \x20 crossgrid generate --daily --stdout\n\
        \x20 crossgrid splice --data crossword-data.json --target index.html\n\
        \x20 crossgrid completions bash > /usr/share/bash-completion/completions/crossgrid",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a puzzle and write its document.
    #[command(
        visible_alias = "gen",
        about = "Generate a crossword puzzle",
        after_help = "EXAMPLES:\n\
            \x20 crossgrid generate\n\
            \x20 crossgrid gen --size 11 --words 10 --seed 7\n\
            \x20 crossgrid gen --bank words/ --output site/crossword-data.json --force\n\
            \x20 crossgrid gen --daily --stdout > today.json"
    )]
    Generate(GenerateArgs),

    /// Embed a puzzle document into a host page.
    #[command(
        about = "Splice puzzle data into a file between marker comments",
        after_help = "EXAMPLES:\n\
            \x20 crossgrid splice --target index.html\n\
            \x20 crossgrid splice --data puzzle.json --target index.html --dry-run\n\
            \x20 crossgrid splice --target app.js --start-marker '// BEGIN' --end-marker '// END'"
    )]
    Splice(SpliceArgs),

    /// Show the word bank that generation would use.
    #[command(
        about = "Show the resolved word bank",
        after_help = "EXAMPLES:\n\
            \x20 crossgrid bank\n\
            \x20 crossgrid bank --length 5\n\
            \x20 crossgrid bank --bank words.toml --format csv"
    )]
    Bank(BankArgs),

    /// Initialise a crossgrid configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crossgrid init           # default location\n\
            \x20 crossgrid init --local   # .crossgrid.toml in CWD\n\
            \x20 crossgrid init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crossgrid completions bash > ~/.local/share/bash-completion/completions/crossgrid\n\
            \x20 crossgrid completions zsh  > ~/.zfunc/_crossgrid\n\
            \x20 crossgrid completions fish > ~/.config/fish/completions/crossgrid.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the crossgrid configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crossgrid config get generation.size\n\
            \x20 crossgrid config set generation.words 20\n\
            \x20 crossgrid config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `crossgrid generate`.
///
/// Unset values fall back to the `[generation]` and `[output]` config
/// sections.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Side length of the square grid.
    #[arg(short = 's', long = "size", value_name = "N", help = "Grid size (default 15)")]
    pub size: Option<NonZeroUsize>,

    /// Number of words to aim for, seed word included.
    #[arg(
        short = 'w',
        long = "words",
        value_name = "N",
        help = "Target word count (default 15)"
    )]
    pub words: Option<usize>,

    /// Upper bound on placement trials.
    #[arg(
        short = 'a',
        long = "attempts",
        value_name = "N",
        help = "Maximum placement attempts (default 2000)"
    )]
    pub attempts: Option<NonZeroUsize>,

    /// Random seed for a reproducible puzzle.
    #[arg(
        long = "seed",
        value_name = "U64",
        conflicts_with = "daily",
        help = "Random seed (reproducible output)"
    )]
    pub seed: Option<u64>,

    /// Derive the seed from today's UTC date.
    #[arg(long = "daily", help = "Use a seed derived from today's UTC date")]
    pub daily: bool,

    /// Word bank file or directory.
    #[arg(
        short = 'b',
        long = "bank",
        value_name = "PATH",
        help = "Word bank file (.toml/.json) or directory"
    )]
    pub bank: Option<PathBuf>,

    /// Where to write the document.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output file (default crossword-data.json)"
    )]
    pub output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file.
    #[arg(
        long = "stdout",
        conflicts_with = "output",
        help = "Print the document JSON to stdout"
    )]
    pub stdout: bool,

    /// Replace an existing output file without asking.
    #[arg(
        short = 'y',
        long = "force",
        visible_alias = "yes",
        help = "Overwrite an existing output file"
    )]
    pub force: bool,

    /// Skip the grid and clue listing.
    #[arg(long = "no-preview", help = "Do not print the grid and clues")]
    pub no_preview: bool,
}

// ── splice ────────────────────────────────────────────────────────────────────

/// Arguments for `crossgrid splice`.
#[derive(Debug, Args)]
pub struct SpliceArgs {
    /// Puzzle document to embed.
    #[arg(
        short = 'd',
        long = "data",
        value_name = "PATH",
        help = "Puzzle document (default: output.path from config)"
    )]
    pub data: Option<PathBuf>,

    /// File to rewrite.
    #[arg(short = 't', long = "target", value_name = "PATH", help = "File to update")]
    pub target: PathBuf,

    #[arg(long = "start-marker", value_name = "TEXT", help = "Start marker line text")]
    pub start_marker: Option<String>,

    #[arg(long = "end-marker", value_name = "TEXT", help = "End marker line text")]
    pub end_marker: Option<String>,

    /// Report what would change without writing.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,
}

// ── bank ──────────────────────────────────────────────────────────────────────

/// Arguments for `crossgrid bank`.
#[derive(Debug, Args)]
pub struct BankArgs {
    /// Word bank file or directory.
    #[arg(
        short = 'b',
        long = "bank",
        value_name = "PATH",
        help = "Word bank file (.toml/.json) or directory"
    )]
    pub bank: Option<PathBuf>,

    /// Only show words of this length.
    #[arg(short = 'l', long = "length", value_name = "N", help = "Filter by word length")]
    pub length: Option<NonZeroUsize>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: BankFormat,
}

/// Output format for the `bank` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BankFormat {
    /// Words grouped by length.
    Table,
    /// One word per line.
    List,
    /// JSON object keyed by length.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crossgrid init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.crossgrid.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crossgrid completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crossgrid config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.size`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "crossgrid", "generate", "--size", "11", "--words", "9", "--seed", "42",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.size.map(NonZeroUsize::get), Some(11));
        assert_eq!(args.words, Some(9));
        assert_eq!(args.seed, Some(42));
        assert!(args.attempts.is_none());
    }

    #[test]
    fn gen_alias() {
        let cli = Cli::parse_from(["crossgrid", "gen", "-y"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.force);
    }

    #[test]
    fn zero_size_rejected() {
        assert!(Cli::try_parse_from(["crossgrid", "generate", "--size", "0"]).is_err());
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(Cli::try_parse_from(["crossgrid", "generate", "--attempts", "0"]).is_err());
    }

    #[test]
    fn seed_conflicts_with_daily() {
        let result = Cli::try_parse_from(["crossgrid", "generate", "--seed", "1", "--daily"]);
        assert!(result.is_err());
    }

    #[test]
    fn stdout_conflicts_with_output() {
        let result = Cli::try_parse_from(["crossgrid", "generate", "--stdout", "-o", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn splice_requires_target() {
        assert!(Cli::try_parse_from(["crossgrid", "splice"]).is_err());
        let cli = Cli::parse_from(["crossgrid", "splice", "--target", "index.html", "--dry-run"]);
        let Commands::Splice(args) = cli.command else {
            panic!("expected Splice command");
        };
        assert_eq!(args.target, PathBuf::from("index.html"));
        assert!(args.dry_run);
        assert!(args.data.is_none());
    }

    #[test]
    fn bank_format_parses() {
        let cli = Cli::parse_from(["crossgrid", "bank", "--format", "csv", "--length", "4"]);
        let Commands::Bank(args) = cli.command else {
            panic!("expected Bank command");
        };
        assert_eq!(args.format, BankFormat::Csv);
        assert_eq!(args.length.map(NonZeroUsize::get), Some(4));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["crossgrid", "--quiet", "--verbose", "bank"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_file_is_global() {
        let cli = Cli::parse_from(["crossgrid", "bank", "--log-file", "run.log"]);
        assert_eq!(cli.global.log_file, Some(PathBuf::from("run.log")));
    }
}
