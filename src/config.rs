//! In-document configuration block parsing and serialization.
//!
//! Options persist inside the generated TOC block as a comment-delimited
//! `key=value` list, so refreshing a document keeps the behaviour it was last
//! generated with. Only `numbering` and `autoSave` round-trip; the level
//! window and anchor toggle are defined in the format but deliberately not
//! read or written, and stay at their defaults.

/// First line of the persisted configuration block.
pub const CONFIG_START: &str = "<!-- vscode-markdown-toc-config";
/// Last line of the persisted configuration block.
pub const CONFIG_END: &str = "/vscode-markdown-toc-config -->";

/// Options steering one TOC refresh pass.
///
/// `min_level ≤ max_level` must hold; both are 1-based Markdown depths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocConfig {
    /// Shallowest heading depth included in the TOC.
    pub min_level: usize,
    /// Deepest heading depth included in the TOC.
    pub max_level: usize,
    /// Prefix TOC entries and heading lines with hierarchical numbering.
    pub numbering: bool,
    /// Link TOC entries to `<a name=…>` anchors injected into headings.
    pub anchor: bool,
    /// Ask the host to persist the document once the batch is applied.
    pub auto_save: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 4,
            numbering: true,
            anchor: true,
            auto_save: true,
        }
    }
}

impl TocConfig {
    /// Width of the heading window.
    #[must_use]
    pub fn window_width(&self) -> usize {
        self.max_level - self.min_level
    }

    /// Read configuration from a document, falling back to defaults.
    ///
    /// Scans for the first config block and applies any recognized
    /// `key=value` lines found before the closing marker. Unknown keys and
    /// malformed values are ignored; a missing block yields the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdtocsync::config::TocConfig;
    /// let lines = vec![
    ///     "<!-- vscode-markdown-toc-config".to_string(),
    ///     "\tnumbering=no".to_string(),
    ///     "/vscode-markdown-toc-config -->".to_string(),
    /// ];
    /// let config = TocConfig::parse(&lines);
    /// assert!(!config.numbering);
    /// assert!(config.anchor);
    /// ```
    #[must_use]
    pub fn parse(lines: &[String]) -> Self {
        let mut config = Self::default();
        let mut in_block = false;
        for line in lines {
            let trimmed = line.trim();
            if !in_block {
                if trimmed.starts_with(CONFIG_START) {
                    in_block = true;
                }
                continue;
            }
            if trimmed.starts_with(CONFIG_END) {
                break;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                continue;
            };
            match key.trim() {
                "numbering" => config.numbering = parse_bool(value),
                "autoSave" => config.auto_save = parse_bool(value),
                _ => {}
            }
        }
        config
    }

    /// Render the block for re-insertion into the TOC.
    #[must_use]
    pub fn serialize(&self) -> String {
        format!(
            "{CONFIG_START}\n\tnumbering={}\n\tautoSave={}\n{CONFIG_END}",
            self.numbering, self.auto_save
        )
    }
}

/// A value counts as true when it starts with `y` or `true`, case-insensitively.
fn parse_bool(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    value.starts_with('y') || value.starts_with("true")
}
