//! README updates
//!
//! A mutation is the block of text appended to a README in one run.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Content written to a README that does not exist yet
pub const README_BOILERPLATE: &str =
    "# Auto-commit Repository\n\nThis repository is managed by auto-commit tool.\n\n";

/// Timestamp format used in update headings (local time, second resolution)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One appended update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mutation {
    /// File that was modified
    pub path: PathBuf,
    /// Whether the file was created with the boilerplate header
    pub created: bool,
    /// Local time stamped into the heading
    pub timestamp: NaiveDateTime,
    /// Generated sentence
    pub sentence: String,
}

impl Mutation {
    /// Heading line, without the trailing newline
    #[must_use]
    pub fn heading(&self) -> String {
        format!("## Update {}", self.timestamp.format(TIMESTAMP_FORMAT))
    }

    /// The exact text appended to the file
    #[must_use]
    pub fn block(&self) -> String {
        format!("\n{}\n\n{}\n", self.heading(), self.sentence)
    }
}
