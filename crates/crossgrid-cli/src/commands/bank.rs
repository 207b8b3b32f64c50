//! Implementation of the `crossgrid bank` command.

use std::collections::BTreeMap;

use crossgrid_adapters::resolve_source;
use crossgrid_core::{application::PuzzleService, domain::WordBank};

use crate::{
    cli::{BankArgs, BankFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: BankArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let bank_path = args.bank.as_deref().or(config.bank.path.as_deref());
    let service = PuzzleService::new(
        resolve_source(bank_path).with_cli_context(|| "resolving word bank")?,
        Box::new(crossgrid_adapters::LocalFilesystem::new()),
    );
    let bank = service.load_bank()?;
    let length = args.length.map(|n| n.get());

    match args.format {
        BankFormat::Table => {
            output.header(&format!(
                "Word bank: {} ({} words)",
                service.bank_source(),
                bank.len()
            ))?;
            for len in lengths(&bank, length) {
                output.print(&format!("\n  {len} letters"))?;
                for entry in bank.words_of_length(len) {
                    output.print(&format!("    {:<width$}  {}", entry.word, entry.clue, width = len))?;
                }
            }
        }

        // Piped formats bypass quiet mode; they are the command's payload.
        BankFormat::List => {
            for len in lengths(&bank, length) {
                for entry in bank.words_of_length(len) {
                    output.data(entry.word)?;
                }
            }
        }

        BankFormat::Json => {
            output.data(&to_json(&bank, length))?;
        }

        BankFormat::Csv => {
            output.data("length,word,clue")?;
            for len in lengths(&bank, length) {
                for entry in bank.words_of_length(len) {
                    output.data(&format!("{len},{},{}", entry.word, csv_field(entry.clue)))?;
                }
            }
        }
    }

    Ok(())
}

fn lengths(bank: &WordBank, only: Option<usize>) -> Vec<usize> {
    bank.lengths().filter(|l| only.is_none_or(|o| o == *l)).collect()
}

/// Same shape as a bank file, so the output can be saved and loaded back.
fn to_json(bank: &WordBank, only: Option<usize>) -> String {
    let buckets: BTreeMap<String, BTreeMap<&str, &str>> = lengths(bank, only)
        .into_iter()
        .map(|len| {
            let words = bank.words_of_length(len).map(|e| (e.word, e.clue)).collect();
            (len.to_string(), words)
        })
        .collect();
    serde_json::to_string_pretty(&buckets).unwrap_or_else(|_| "{}".into())
}

/// Quote a field when it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
