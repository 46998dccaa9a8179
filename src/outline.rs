//! Outline construction: windowing, hierarchical numbering, and anchors.
//!
//! Raw headings from the scanner are filtered to the configured level
//! window, then decorated with dotted section numbers and unique anchor
//! names. The outline drives both TOC rendering and heading rewriting.

use crate::anchors::Slugifier;
use crate::config::TocConfig;
use crate::headings::RawHeading;

/// A heading admitted to the outline, carrying everything needed to render
/// its TOC entry and rewrite its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineHeading {
    /// Markdown depth of the source line.
    pub level: usize,
    /// Depth within the window: zero for `min_level`.
    pub relative_level: usize,
    /// Title text, already stripped of stale decoration.
    pub title: String,
    /// Counter snapshot for every window depth; zeros mark skipped levels.
    pub numbering: Vec<usize>,
    /// Unique anchor name for intra-document links.
    pub anchor: String,
    /// 0-based index of the source line.
    pub source_line: usize,
    /// Char length of the original source line.
    pub source_len: usize,
}

impl OutlineHeading {
    /// Dotted section label built from the non-zero counters.
    ///
    /// A document that opens below `min_level` leaves shallower counters at
    /// zero; those positions are skipped rather than printed as `0.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdtocsync::outline::OutlineHeading;
    ///
    /// let heading = OutlineHeading {
    ///     level: 3,
    ///     relative_level: 1,
    ///     title: "Parsing".to_string(),
    ///     numbering: vec![1, 2, 0],
    ///     anchor: "parsing".to_string(),
    ///     source_line: 4,
    ///     source_len: 11,
    /// };
    /// assert_eq!(heading.numbering_label(), "1.2.");
    /// ```
    #[must_use]
    pub fn numbering_label(&self) -> String {
        self.numbering
            .iter()
            .filter(|&&counter| counter > 0)
            .map(|counter| format!("{counter}."))
            .collect()
    }

    /// Render the replacement source line for this heading.
    ///
    /// The hash run always reflects the original depth; numbering and the
    /// inline anchor tag are added according to `config`.
    #[must_use]
    pub fn heading_line(&self, config: &TocConfig) -> String {
        let mut line = "#".repeat(self.level);
        if config.numbering {
            line.push(' ');
            line.push_str(&self.numbering_label());
        }
        line.push(' ');
        if config.anchor {
            line.push_str(&format!("<a name='{}'></a>", self.anchor));
        }
        line.push_str(&self.title);
        line
    }
}

/// Build the outline from scanned headings.
///
/// Headings outside `[min_level, max_level]` are dropped. Counters advance
/// in document order: entering a depth increments its counter and resets
/// every deeper one, so a later sibling restarts its subtree numbering.
/// Anchors are assigned in the same order, with duplicate titles receiving
/// numeric suffixes.
#[must_use]
pub fn build_outline(headings: &[RawHeading], config: &TocConfig) -> Vec<OutlineHeading> {
    let mut counters = vec![0usize; config.window_width() + 1];
    let mut slugs = Slugifier::new();
    let mut outline = Vec::new();

    for heading in headings {
        if !(config.min_level..=config.max_level).contains(&heading.level) {
            continue;
        }
        let relative_level = heading.level - config.min_level;
        for counter in &mut counters[relative_level + 1..] {
            *counter = 0;
        }
        counters[relative_level] += 1;
        outline.push(OutlineHeading {
            level: heading.level,
            relative_level,
            title: heading.title.clone(),
            numbering: counters.clone(),
            anchor: slugs.assign(&heading.title),
            source_line: heading.source_line,
            source_len: heading.source_len,
        });
    }

    outline
}
