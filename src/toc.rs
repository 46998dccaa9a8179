//! Rendering of the TOC block.
//!
//! The block is fully regenerated on every run: start marker, one entry per
//! outline heading, the embedded configuration block, and the end marker.
//! Everything between the markers is owned by the tool and safe to replace.

use crate::config::TocConfig;
use crate::outline::OutlineHeading;

/// Marks the first line of a generated TOC block.
pub const TOC_START: &str = "<!-- vscode-markdown-toc -->";
/// Marks the last line of a generated TOC block.
pub const TOC_END: &str = "<!-- /vscode-markdown-toc -->";

/// Render the complete TOC block as a newline-joined string.
///
/// The result carries no trailing newline; the patch planner decides how the
/// block joins the surrounding document.
///
/// # Examples
///
/// ```
/// use mdtocsync::config::TocConfig;
/// use mdtocsync::headings::scan_lines;
/// use mdtocsync::outline::build_outline;
/// use mdtocsync::toc::render_toc;
///
/// let lines = vec!["## Intro".to_string(), "### Detail".to_string()];
/// let config = TocConfig::default();
/// let outline = build_outline(&scan_lines(&lines).headings, &config);
/// let block = render_toc(&outline, &config);
/// assert!(block.starts_with("<!-- vscode-markdown-toc -->\n"));
/// assert!(block.contains("* 1. [Intro](#intro)\n"));
/// assert!(block.contains("\t* 1.1. [Detail](#detail)\n"));
/// assert!(block.ends_with("<!-- /vscode-markdown-toc -->"));
/// ```
#[must_use]
pub fn render_toc(outline: &[OutlineHeading], config: &TocConfig) -> String {
    let mut block = vec![TOC_START.to_string()];
    for heading in outline {
        let line = entry_line(heading, config);
        if !line.is_empty() {
            block.push(line);
        }
    }
    block.push(config.serialize());
    block.push(TOC_END.to_string());
    block.join("\n")
}

/// Render one TOC entry: tab indentation, bullet, optional numbering, and
/// the title as a link when anchors are enabled.
fn entry_line(heading: &OutlineHeading, config: &TocConfig) -> String {
    let indent = "\t".repeat(heading.relative_level);
    let numbering = if config.numbering {
        format!(" {}", heading.numbering_label())
    } else {
        String::new()
    };
    let text = if config.anchor {
        format!("[{}](#{})", heading.title, heading.anchor)
    } else {
        heading.title.clone()
    };
    format!("{indent}*{numbering} {text}")
}
