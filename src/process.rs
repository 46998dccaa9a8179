//! High-level document refresh pipeline.
//!
//! Ties the stages together: parse the embedded configuration, scan for
//! headings and a previous TOC, build the outline, render the block, and
//! plan the edit batch. Callers choose between inspecting the plan and
//! applying it.

use crate::config::TocConfig;
use crate::headings::scan_lines;
use crate::outline::{OutlineHeading, build_outline};
use crate::patch::{TextEdit, apply_edits, plan_edits};
use crate::toc::render_toc;

/// The full plan for one refresh, before any text has changed.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// Configuration read from the document, or the defaults.
    pub config: TocConfig,
    /// Outline headings in document order.
    pub headings: Vec<OutlineHeading>,
    /// Rendered TOC block, newline-joined without a trailing newline.
    pub toc: String,
    /// Edits against the original document coordinates.
    pub edits: Vec<TextEdit>,
}

/// Plan a refresh of `lines` without applying it.
///
/// The outcome carries the parsed configuration so callers can honour
/// settings such as `autoSave` that reach beyond the text itself.
#[must_use]
pub fn refresh_document(lines: &[String]) -> RefreshOutcome {
    let config = TocConfig::parse(lines);
    let report = scan_lines(lines);
    let headings = build_outline(&report.headings, &config);
    let toc = render_toc(&headings, &config);
    let edits = plan_edits(&headings, &config, &toc, report.toc);
    RefreshOutcome {
        config,
        headings,
        toc,
        edits,
    }
}

/// Refresh `lines` and return the updated document.
///
/// Running the result through another refresh yields the same lines again:
/// numbering, anchors, and the TOC block are all regenerated from the
/// stripped titles rather than accumulated.
///
/// # Examples
///
/// ```
/// use mdtocsync::process::refresh_lines;
///
/// let out = refresh_lines(&["## Intro".to_string()]);
/// assert_eq!(out[0], "<!-- vscode-markdown-toc -->");
/// assert_eq!(out[1], "* 1. [Intro](#intro)");
/// assert!(out.last().is_some_and(|line| line.ends_with("Intro")));
/// assert_eq!(refresh_lines(&out), out);
/// ```
#[must_use]
pub fn refresh_lines(lines: &[String]) -> Vec<String> {
    let outcome = refresh_document(lines);
    apply_edits(lines, &outcome.edits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::{TOC_END, TOC_START};

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn inserts_a_toc_above_the_first_line() {
        let out = refresh_lines(&doc(&["## Alpha", "body"]));
        assert_eq!(out[0], TOC_START);
        assert_eq!(out[1], "* 1. [Alpha](#alpha)");
        assert_eq!(out.last().map(String::as_str), Some("body"));
        assert!(out.contains(&"## 1. <a name='alpha'></a>Alpha".to_string()));
    }

    #[test]
    fn replaces_a_stale_toc_in_place() {
        let out = refresh_lines(&doc(&[
            TOC_START,
            "* 9. [Gone](#gone)",
            TOC_END,
            "",
            "## Alpha",
        ]));
        assert_eq!(out.iter().filter(|l| *l == TOC_START).count(), 1);
        assert!(!out.iter().any(|l| l.contains("Gone")));
        assert!(out.contains(&"* 1. [Alpha](#alpha)".to_string()));
    }

    #[test]
    fn refresh_is_idempotent() {
        let input = doc(&["# Title", "## Alpha", "### Detail", "## Beta"]);
        let once = refresh_lines(&input);
        let twice = refresh_lines(&once);
        assert_eq!(twice, once);
    }

    #[test]
    fn outcome_reports_the_parsed_configuration() {
        let outcome = refresh_document(&doc(&[
            "<!-- vscode-markdown-toc-config",
            "\tnumbering=false",
            "\tautoSave=no",
            "/vscode-markdown-toc-config -->",
            "## Alpha",
        ]));
        assert!(!outcome.config.numbering);
        assert!(!outcome.config.auto_save);
        assert_eq!(outcome.headings.len(), 1);
    }

    #[test]
    fn disabled_numbering_leaves_heading_text_unnumbered() {
        let out = refresh_lines(&doc(&[
            "<!-- vscode-markdown-toc-config",
            "\tnumbering=no",
            "/vscode-markdown-toc-config -->",
            "## Alpha",
        ]));
        assert!(out.contains(&"## <a name='alpha'></a>Alpha".to_string()));
        assert!(out.contains(&"* [Alpha](#alpha)".to_string()));
    }

    #[test]
    fn empty_document_gets_a_bare_toc_block() {
        let out = refresh_lines(&[]);
        assert_eq!(out.first().map(String::as_str), Some(TOC_START));
        assert_eq!(out.last().map(String::as_str), Some(""));
        assert!(out.contains(&TOC_END.to_string()));
    }
}
