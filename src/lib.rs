//! Library for inserting and refreshing Markdown tables of contents.
//!
//! A document is processed as a vector of lines. One refresh parses the
//! embedded configuration, scans for headings and a previously generated
//! TOC block, numbers the headings, assigns unique anchors, and plans a
//! batch of text edits that bring the document up to date. Running the
//! refresh again on its own output changes nothing.

pub mod anchors;
pub mod config;
pub mod headings;
pub mod io;
pub mod outline;
pub mod patch;
pub mod process;
pub mod toc;

pub use anchors::{Slugifier, slugify};
pub use config::TocConfig;
pub use headings::{RawHeading, ScanReport, TocSpan, scan_lines};
pub use outline::{OutlineHeading, build_outline};
pub use patch::{TextEdit, apply_edits, plan_edits};
pub use process::{RefreshOutcome, refresh_document, refresh_lines};
pub use toc::{TOC_END, TOC_START, render_toc};
