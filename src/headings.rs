//! Document scanning for ATX headings and TOC boundary markers.
//!
//! One forward pass classifies each line as blank, indented preformatted
//! text, TOC boundary marker, fence toggle, fenced interior, heading, or
//! plain text. Fence state is a single toggle: only triple-backtick fences
//! are recognized, matching the tool's reduced Markdown model.

use crate::toc::{TOC_END, TOC_START};

const CLOSING_ANCHOR: &str = "</a>";

/// A heading as found in the document, before windowing and numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeading {
    /// 1-based Markdown depth: the run of leading `#` characters.
    pub level: usize,
    /// Trimmed title text with any stale anchor tag stripped.
    pub title: String,
    /// 0-based index of the source line.
    pub source_line: usize,
    /// Char length of the original line, bounding the replacement range.
    pub source_len: usize,
}

/// Span of a previously generated TOC block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocSpan {
    /// Line carrying the start marker.
    pub start: usize,
    /// Line carrying the end marker.
    pub end: usize,
    /// Char length of the end marker line.
    pub end_len: usize,
}

/// Everything one scanning pass learns about a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Headings in document order, unfiltered by level.
    pub headings: Vec<RawHeading>,
    /// Previous TOC block, when both boundary markers were found in order.
    pub toc: Option<TocSpan>,
}

/// Scan a document for headings and a previously generated TOC block.
///
/// Heading records keep their source coordinates so later stages can plan
/// full-line replacements. Level filtering belongs to the outline builder;
/// every syntactically valid heading is reported here.
///
/// # Examples
///
/// ```
/// use mdtocsync::headings::scan_lines;
///
/// let lines = vec![
///     "## Setup".to_string(),
///     "```".to_string(),
///     "# shell comment, not a heading".to_string(),
///     "```".to_string(),
/// ];
/// let report = scan_lines(&lines);
/// assert_eq!(report.headings.len(), 1);
/// assert_eq!(report.headings[0].title, "Setup");
/// ```
#[must_use]
pub fn scan_lines(lines: &[String]) -> ScanReport {
    let mut headings = Vec::new();
    let mut toc_start = None;
    let mut toc_end = None;
    let mut in_fence = false;

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        // Content starting beyond column 3 is preformatted and never
        // inspected, not even for fence markers.
        if indent_columns(line) > 3 {
            continue;
        }
        // Boundary markers are honoured even inside an unclosed fence, so a
        // stray fence above an old TOC cannot orphan it.
        if trimmed.starts_with(TOC_START) {
            toc_start = Some(idx);
            continue;
        }
        if trimmed.starts_with(TOC_END) {
            toc_end = Some((idx, line.chars().count()));
            continue;
        }
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(heading) = parse_heading(trimmed, idx, line) {
            headings.push(heading);
        }
    }

    let toc = match (toc_start, toc_end) {
        (Some(start), Some((end, end_len))) if start <= end => {
            Some(TocSpan { start, end, end_len })
        }
        _ => None,
    };
    ScanReport { headings, toc }
}

/// Char column of the first non-whitespace character; tabs count as one.
fn indent_columns(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Parse one trimmed line as an ATX heading.
///
/// The level is the run of leading `#` characters and must be followed by a
/// space: a bare `#` run, or text glued to the marker, is not a heading.
fn parse_heading(trimmed: &str, idx: usize, raw: &str) -> Option<RawHeading> {
    if !trimmed.starts_with('#') {
        return None;
    }
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    let title = trimmed[level..].strip_prefix(' ')?;
    let title = strip_stale_anchor(title).trim();
    if title.is_empty() {
        return None;
    }
    Some(RawHeading {
        level,
        title: title.to_string(),
        source_line: idx,
        source_len: raw.chars().count(),
    })
}

/// Drop a closing anchor tag left by an earlier run, and everything before
/// it: re-scanning `## 1.2. <a name='x'></a>Title` must yield `Title`.
fn strip_stale_anchor(title: &str) -> &str {
    match title.find(CLOSING_ANCHOR) {
        Some(at) => &title[at + CLOSING_ANCHOR.len()..],
        None => title,
    }
}
