//! Listing rendering
//!
//! A listing is a `// <path>` header followed by one entry per kept record,
//! entries separated by a blank line. Records keep their source order.

use super::patterns::WHITESPACE;
use super::{ExtractionMode, MatchRecord};
use crate::file_utils::header_label;

/// The lines one API element contributes to a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub lines: Vec<String>,
}

impl RenderedEntry {
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Collapse every whitespace run (newlines included) to one space.
fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Render one record for `mode`.
///
/// Returns `None` when the record's kind does not belong to the mode, or
/// when the mode needs a block the record does not have (enums).
pub fn render_record(record: &MatchRecord, mode: ExtractionMode) -> Option<RenderedEntry> {
    if record.kind != mode.kind() {
        return None;
    }

    let mut lines = Vec::new();
    if let Some(summary) = &record.summary {
        lines.push(format!("// {}", summary));
    }

    match mode {
        ExtractionMode::Methods => {
            lines.push(format!("{};", record.declaration()));
        }
        ExtractionMode::Attributes => {
            let mut declaration = record.declaration();
            if let Some(block) = &record.block {
                let accessors = collapse_whitespace(block);
                if accessors.is_empty() {
                    declaration.push_str(" { }");
                } else {
                    declaration.push_str(" { ");
                    declaration.push_str(&accessors);
                    declaration.push_str(" }");
                }
            }
            lines.push(declaration);
        }
        ExtractionMode::Enum => {
            let block = record.block.as_deref()?;
            lines.extend(
                block
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string),
            );
        }
    }

    if lines.is_empty() { None } else { Some(RenderedEntry { lines }) }
}

/// Assemble the listing for `records`, headed by the file's `label`.
pub fn render_listing(
    label: &str,
    records: impl IntoIterator<Item = MatchRecord>,
    mode: ExtractionMode,
) -> String {
    let mut sections = vec![format!("// {}", header_label(label))];
    sections.extend(
        records
            .into_iter()
            .filter_map(|record| render_record(&record, mode))
            .map(|entry| entry.to_text()),
    );
    sections.join("\n\n")
}
