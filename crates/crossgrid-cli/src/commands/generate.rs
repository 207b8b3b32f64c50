//! Implementation of the `crossgrid generate` command.

use std::io::IsTerminal as _;
use std::path::Path;

use chrono::{Datelike, NaiveDate, Utc};
use tracing::{info, instrument, warn};

use crossgrid_adapters::{LocalFilesystem, resolve_source};
use crossgrid_core::{
    application::{ApplicationError, GenerateOptions, GeneratedPuzzle, PuzzleService},
    error::CrosswordError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Generate a puzzle and write (or print) its document.
#[instrument(skip_all, fields(stdout = args.stdout, daily = args.daily))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = resolve_options(&args, &config, Utc::now().date_naive());
    let bank_path = args.bank.as_deref().or(config.bank.path.as_deref());

    let service = PuzzleService::new(
        resolve_source(bank_path).with_cli_context(|| "resolving word bank")?,
        Box::new(LocalFilesystem::new()),
    );
    info!(bank = %service.bank_source(), "Generating crossword");

    let generated = service.generate(&options)?;

    if args.stdout {
        let json = generated
            .document
            .to_json_pretty()
            .map_err(|e| {
                CrosswordError::from(ApplicationError::SerializationFailed {
                    reason: e.to_string(),
                })
            })?;
        output.data(&json)?;
        return Ok(());
    }

    if !args.no_preview && output.format() != OutputFormat::Json {
        preview(&generated, &output)?;
    }
    report(&generated, &output)?;

    let path = args.output.unwrap_or(config.output.path);
    let overwrite = args.force || confirm_overwrite(&path)?;
    service.write_document(&generated.document, &path, overwrite)?;

    if output.format() == OutputFormat::Json {
        let summary = serde_json::json!({
            "path": path,
            "seed": generated.seed,
            "words": generated.report.placed,
            "target": generated.report.target,
            "attempts": generated.report.attempts,
        });
        output.data(&summary.to_string())?;
    } else {
        output.success(&format!(
            "Wrote {} words to {} (seed {})",
            generated.document.word_count(),
            path.display(),
            generated.seed
        ))?;
    }
    Ok(())
}

/// Flags first, then config. `--daily` replaces any configured seed.
fn resolve_options(args: &GenerateArgs, config: &AppConfig, today: NaiveDate) -> GenerateOptions {
    let generation = &config.generation;
    let seed = match (args.seed, args.daily) {
        (Some(seed), _) => Some(seed),
        (None, true) => Some(daily_seed(today)),
        (None, false) => generation.seed,
    };
    GenerateOptions {
        size: args.size.map_or(generation.size, |n| n.get()),
        target_words: args.words.unwrap_or(generation.words),
        max_attempts: args.attempts.map_or(generation.max_attempts, |n| n.get()),
        seed,
    }
}

/// `YYYYMMDD` as a number, so everyone gets the same puzzle on a given day.
pub fn daily_seed(date: NaiveDate) -> u64 {
    u64::from(date.year().unsigned_abs()) * 10_000
        + u64::from(date.month()) * 100
        + u64::from(date.day())
}

fn preview(generated: &GeneratedPuzzle, output: &OutputManager) -> CliResult<()> {
    output.grid(&generated.puzzle)?;
    output.clues(&generated.document)?;
    output.print("")?;
    Ok(())
}

fn report(generated: &GeneratedPuzzle, output: &OutputManager) -> CliResult<()> {
    let report = &generated.report;
    if !report.seed_placed {
        warn!(size = generated.puzzle.size(), "Longest word does not fit the grid");
        output.warning("The longest word does not fit this grid; nothing was placed")?;
    } else if !report.reached_target() {
        output.warning(&format!(
            "Placed {} of {} words before the {}-attempt budget ran out",
            report.placed, report.target, report.max_attempts
        ))?;
    } else {
        output.info(&format!(
            "Placed {} words in {} attempts",
            report.placed, report.attempts
        ))?;
    }
    Ok(())
}

/// Ask before replacing an existing document.
///
/// Without a terminal there is nobody to ask; the write then fails with
/// the usual "already exists" error.
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    if !path.exists() || !std::io::stdin().is_terminal() {
        return Ok(false);
    }
    if confirm(&format!("{} already exists. Overwrite?", path.display()))? {
        Ok(true)
    } else {
        Err(CliError::Cancelled)
    }
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(prompt: &str) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
