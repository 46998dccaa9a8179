//! Anchor slug derivation and de-duplication.
//!
//! Slugs keep only characters that are safe in a URL fragment, drop any
//! leading run of non-letters (numbering prefixes, list markers), and are
//! lowercased. Within one pass every assigned anchor is unique: a collision
//! probes `-1`, `-2`, … until a free suffix is found.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

static SLUG_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z0-9\-_:.]|^[^a-z]+").expect("valid slug regex"));

/// Reduce a heading title to its URL-fragment-safe form.
///
/// # Examples
///
/// ```
/// use mdtocsync::anchors::slugify;
/// assert_eq!(slugify("Getting Started"), "gettingstarted");
/// assert_eq!(slugify("2.1. Error Handling"), "errorhandling");
/// assert_eq!(slugify("io::Error, explained"), "io::errorexplained");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    SLUG_STRIP_RE.replace_all(title, "").to_lowercase()
}

/// Assigns unique anchor slugs across one document pass.
#[derive(Debug, Default)]
pub struct Slugifier {
    assigned: HashSet<String>,
}

impl Slugifier {
    /// Create a slugifier with no anchors assigned yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the slug for `title` and reserve it.
    ///
    /// The first "Intro" yields `intro`; later identical titles yield
    /// `intro-1`, `intro-2`, … Titles with no sluggable characters are valid
    /// and produce the empty slug, then `-1`, `-2` on repeats.
    #[must_use]
    pub fn assign(&mut self, title: &str) -> String {
        let base = slugify(title);
        let mut anchor = base.clone();
        let mut suffix = 1usize;
        while !self.assigned.insert(anchor.clone()) {
            anchor = format!("{base}-{suffix}");
            suffix += 1;
        }
        anchor
    }
}
