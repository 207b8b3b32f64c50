//! `crossgrid splice`: embed a puzzle document into a host file.

use std::path::Path;

use tracing::{info, instrument};

use crossgrid_adapters::{DocumentSplicer, LocalFilesystem, MarkerPair, SpliceOutcome};
use crossgrid_core::application::{PuzzleService, ports::Filesystem};

use crate::{
    cli::SpliceArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: SpliceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let data = args.data.unwrap_or(config.output.path);
    let markers = MarkerPair::new(
        args.start_marker.unwrap_or(config.splice.start_marker),
        args.end_marker.unwrap_or(config.splice.end_marker),
    );

    let splicer = DocumentSplicer::new(markers);
    let outcome = splice_file(
        &LocalFilesystem::new(),
        &splicer,
        &data,
        &args.target,
        args.dry_run,
    )?;

    let summary = format!(
        "lines {}-{} of {} ({} removed, {} inserted)",
        outcome.start_line,
        outcome.start_line + outcome.removed_lines - 1,
        args.target.display(),
        outcome.removed_lines,
        outcome.inserted_lines
    );
    if args.dry_run {
        output.info(&format!("Dry run: would replace {summary}"))?;
    } else {
        output.success(&format!("Embedded {} into {summary}", data.display()))?;
    }
    Ok(())
}

/// Read `data`, splice it into `target`, and write the result back unless
/// `dry_run` is set. Nothing is written when a marker is missing.
#[instrument(skip(filesystem, splicer), fields(data = %data.display(), target = %target.display()))]
pub fn splice_file(
    filesystem: &dyn Filesystem,
    splicer: &DocumentSplicer,
    data: &Path,
    target: &Path,
    dry_run: bool,
) -> CliResult<SpliceOutcome> {
    let document = PuzzleService::load_document(filesystem, data)?;
    let source = filesystem.read_to_string(target)?;
    let outcome = splicer.splice(&source, &document, target)?;

    if dry_run {
        info!("Dry run, target left untouched");
    } else {
        filesystem.write_file(target, &outcome.content)?;
        info!(words = document.word_count(), "Target updated");
    }
    Ok(outcome)
}
