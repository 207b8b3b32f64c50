//! Splices a puzzle document into a host file between marker lines.
//!
//! The host (typically an HTML page with an inline script) carries two
//! comment lines. Everything from the start marker line up to, but not
//! including, the end marker line is replaced by a freshly rendered
//! `const puzzleData = {...};` block:
//!
//! ```text
//!         // --- PRE-GENERATED CROSSWORD DATA ---
//!         // Generated by crossgrid 0.1.0 on 2026-03-14
//!         const puzzleData = {
//!           "width": 15,
//!           ...
//!         };
//!
//!         // --- STATE ---
//! ```
//!
//! Splicing is pure text work; the caller decides whether and where to
//! write the result. If either marker is missing nothing is produced.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crossgrid_core::{
    application::ApplicationError, domain::PuzzleDocument, error::CrosswordResult,
};

pub const DEFAULT_START_MARKER: &str = "// --- PRE-GENERATED CROSSWORD DATA ---";
pub const DEFAULT_END_MARKER: &str = "// --- STATE ---";

/// The pair of marker strings that bound the generated block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    pub start: String,
    pub end: String,
}

impl MarkerPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self::new(DEFAULT_START_MARKER, DEFAULT_END_MARKER)
    }
}

/// Result of a successful splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceOutcome {
    /// Full new content of the host file.
    pub content: String,
    /// 1-based line number of the start marker in the original.
    pub start_line: usize,
    /// Lines removed from the original (start marker through the line
    /// before the end marker).
    pub removed_lines: usize,
    /// Lines in the generated block, trailing blank line included.
    pub inserted_lines: usize,
}

/// Renders and inserts the generated block.
#[derive(Debug, Clone)]
pub struct DocumentSplicer {
    markers: MarkerPair,
    generator: String,
    generated_on: NaiveDate,
}

impl DocumentSplicer {
    /// A splicer stamped with this crate's version and today's UTC date.
    pub fn new(markers: MarkerPair) -> Self {
        Self {
            markers,
            generator: format!("crossgrid {}", crossgrid_core::VERSION),
            generated_on: Utc::now().date_naive(),
        }
    }

    /// Override the date written into the header comment.
    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    pub fn markers(&self) -> &MarkerPair {
        &self.markers
    }

    /// Replace the marked region of `source` with `document`.
    ///
    /// `host` only labels errors.
    ///
    /// # Errors
    /// [`ApplicationError::MarkerNotFound`] when the start marker is absent
    /// or no end marker follows it.
    pub fn splice(
        &self,
        source: &str,
        document: &PuzzleDocument,
        host: &Path,
    ) -> CrosswordResult<SpliceOutcome> {
        let lines: Vec<&str> = source.split_inclusive('\n').collect();

        let start = lines
            .iter()
            .position(|line| line.contains(self.markers.start.as_str()))
            .ok_or_else(|| self.missing(&self.markers.start, host))?;
        let end = lines[start + 1..]
            .iter()
            .position(|line| line.contains(self.markers.end.as_str()))
            .map(|offset| start + 1 + offset)
            .ok_or_else(|| self.missing(&self.markers.end, host))?;

        let indent: String = lines[start]
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect();
        let block = self.render_block(document, &indent)?;

        let mut content = String::with_capacity(source.len() + block.len());
        lines[..start].iter().for_each(|l| content.push_str(l));
        content.push_str(&block);
        lines[end..].iter().for_each(|l| content.push_str(l));

        debug!(
            host = %host.display(),
            start_line = start + 1,
            end_line = end + 1,
            "Document spliced"
        );

        Ok(SpliceOutcome {
            content,
            start_line: start + 1,
            removed_lines: end - start,
            inserted_lines: block.lines().count(),
        })
    }

    /// The generated block, ending with a blank line.
    pub fn render_block(&self, document: &PuzzleDocument, indent: &str) -> CrosswordResult<String> {
        let json = document
            .to_json_pretty()
            .map_err(|e| ApplicationError::SerializationFailed {
                reason: e.to_string(),
            })?;
        let separator = format!("\n{indent}");
        let body = json.lines().collect::<Vec<_>>().join(separator.as_str());

        Ok(format!(
            "{indent}{start}\n\
             {indent}// Generated by {generator} on {date}\n\
             {indent}const puzzleData = {body};\n\
             \n",
            start = self.markers.start,
            generator = self.generator,
            date = self.generated_on.format("%Y-%m-%d"),
        ))
    }

    fn missing(&self, marker: &str, host: &Path) -> ApplicationError {
        ApplicationError::MarkerNotFound {
            marker: marker.to_string(),
            path: host.to_path_buf(),
        }
    }
}
