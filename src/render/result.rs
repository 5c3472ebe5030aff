//! Rendering result with statistics and warnings.

use crate::model::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of rendering a draft, including statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered document
    pub document: Document,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(document: Document, stats: RenderStats) -> Self {
        Self { document, stats }
    }

    /// Check if rendering produced any warning.
    pub fn has_warnings(&self) -> bool {
        !self.stats.warnings.is_empty()
    }
}

/// A recoverable anomaly found in the draft.
///
/// Warnings never abort a render; the document is still produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderWarning {
    /// A table row had a different cell count than the first row and was
    /// padded or truncated.
    MalformedTable {
        /// Index of the table in the document (0-based)
        table: usize,
        /// Row index within the table, after divider removal
        row: usize,
        /// Cell count of the first row
        expected: usize,
        /// Cell count found
        found: usize,
    },

    /// The draft ended before `####END TITLE PAGE####`.
    UnterminatedTitlePage,
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::MalformedTable {
                table,
                row,
                expected,
                found,
            } => write!(
                f,
                "table {} row {} has {} cells, expected {}",
                table + 1,
                row + 1,
                found,
                expected
            ),
            RenderWarning::UnterminatedTitlePage => {
                write!(f, "title page is not closed before the end of the input")
            }
        }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of headings emitted
    pub heading_count: u32,

    /// Number of body paragraphs emitted
    pub paragraph_count: u32,

    /// Number of bullet items emitted
    pub bullet_count: u32,

    /// Number of tables emitted
    pub table_count: u32,

    /// Number of title pages emitted
    pub title_page_count: u32,

    /// Number of forced page breaks
    pub page_break_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,

    /// Anomalies tolerated during rendering
    pub warnings: Vec<RenderWarning>,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment bullet count.
    pub fn add_bullet(&mut self) {
        self.bullet_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment title page count.
    pub fn add_title_page(&mut self) {
        self.title_page_count += 1;
    }

    /// Increment page break count.
    pub fn add_page_break(&mut self) {
        self.page_break_count += 1;
    }

    /// Record a warning.
    pub fn add_warning(&mut self, warning: RenderWarning) {
        self.warnings.push(warning);
    }

    /// Total number of blocks emitted.
    pub fn block_count(&self) -> u32 {
        self.heading_count
            + self.paragraph_count
            + self.bullet_count
            + self.table_count
            + self.page_break_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.bullet_count += other.bullet_count;
        self.table_count += other.table_count;
        self.title_page_count += other.title_page_count;
        self.page_break_count += other.page_break_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
        self.warnings.extend(other.warnings.iter().cloned());
    }
}
