//! Edit planning and application.
//!
//! Every change the tool makes is expressed as a [`TextEdit`] against the
//! original document coordinates, then the whole batch is applied in one
//! pass. Applying bottom-up keeps earlier coordinates valid while later
//! lines shift.

use crate::config::TocConfig;
use crate::headings::TocSpan;
use crate::outline::OutlineHeading;

/// A single replacement against original document coordinates.
///
/// Lines are 0-based; columns count chars. An insertion is a zero-width
/// replacement. Replacement text may span lines via embedded `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
    pub text: String,
}

impl TextEdit {
    /// Replace the range `[start, end)` with `text`.
    #[must_use]
    pub fn replace(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
        text: String,
    ) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
            text,
        }
    }

    /// Insert `text` at a single position.
    #[must_use]
    pub fn insert(line: usize, col: usize, text: String) -> Self {
        Self::replace(line, col, line, col, text)
    }
}

/// Plan the full edit batch for one refresh.
///
/// Each outline heading becomes a full-line replacement, in document order.
/// The TOC block either replaces the previous span or is inserted at the
/// top of the document, with a newline appended so the first body line
/// keeps its own row.
#[must_use]
pub fn plan_edits(
    outline: &[OutlineHeading],
    config: &TocConfig,
    toc_text: &str,
    span: Option<TocSpan>,
) -> Vec<TextEdit> {
    let mut edits: Vec<TextEdit> = outline
        .iter()
        .map(|heading| {
            TextEdit::replace(
                heading.source_line,
                0,
                heading.source_line,
                heading.source_len,
                heading.heading_line(config),
            )
        })
        .collect();
    match span {
        Some(span) => edits.push(TextEdit::replace(
            span.start,
            0,
            span.end,
            span.end_len,
            toc_text.to_string(),
        )),
        None => edits.push(TextEdit::insert(0, 0, format!("{toc_text}\n"))),
    }
    edits
}

/// Apply a batch of edits whose coordinates all refer to `lines`.
///
/// Edits are applied from the bottom of the document upwards so earlier
/// coordinates stay valid. At equal start positions the zero-width insert
/// sorts first and is therefore applied last, landing the inserted text
/// above a replacement of the same line.
#[must_use]
pub fn apply_edits(lines: &[String], edits: &[TextEdit]) -> Vec<String> {
    let mut lines = lines.to_vec();
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.start_line, edit.start_col, edit.end_line, edit.end_col));
    for edit in ordered.iter().rev() {
        splice(&mut lines, edit);
    }
    lines
}

fn splice(lines: &mut Vec<String>, edit: &TextEdit) {
    let prefix = char_prefix(line_at(lines, edit.start_line), edit.start_col);
    let suffix = char_suffix(line_at(lines, edit.end_line), edit.end_col);
    let merged = format!("{prefix}{}{suffix}", edit.text);
    let replacement = merged.split('\n').map(ToString::to_string);

    if edit.start_line >= lines.len() {
        lines.extend(replacement);
        return;
    }
    let end = edit.end_line.min(lines.len() - 1);
    let tail = lines.split_off(end + 1);
    lines.truncate(edit.start_line);
    lines.extend(replacement);
    lines.extend(tail);
}

fn line_at(lines: &[String], idx: usize) -> &str {
    lines.get(idx).map_or("", String::as_str)
}

/// Text strictly before char column `col`; the whole line when the column
/// lies at or past its end.
fn char_prefix(line: &str, col: usize) -> &str {
    match line.char_indices().nth(col) {
        Some((at, _)) => &line[..at],
        None => line,
    }
}

/// Text from char column `col` onwards; empty when the column lies at or
/// past the end of the line.
fn char_suffix(line: &str, col: usize) -> &str {
    match line.char_indices().nth(col) {
        Some((at, _)) => &line[at..],
        None => "",
    }
}
