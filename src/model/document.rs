//! Document-level types.

use super::{Block, Footer, PageSetup, Paragraph, Table};
use crate::style::StyleSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rendered document, ready to be serialized.
///
/// The document owns the [`StyleSet`] it was rendered with, so every writer
/// can resolve the style names its blocks reference without extra input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Named styles and page geometry
    pub styles: StyleSet,

    /// Body blocks in order
    pub blocks: Vec<Block>,

    /// Footer of the primary section
    pub footer: Option<Footer>,
}

impl Document {
    /// Create a new empty document bound to a style set.
    pub fn new(styles: StyleSet) -> Self {
        Self {
            metadata: Metadata::default(),
            styles,
            blocks: Vec::new(),
            footer: None,
        }
    }

    /// Page size and margins.
    pub fn page_setup(&self) -> &PageSetup {
        &self.styles.page_setup
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Add a forced page break.
    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    /// Attach the footer, replacing any previous one.
    pub fn set_footer(&mut self, footer: Footer) {
        self.footer = Some(footer);
    }

    /// Get the number of body blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no body blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over body paragraphs, skipping tables and page breaks.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(Block::as_paragraph)
    }

    /// Iterate over body tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(Block::as_table)
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.plain_text()),
                Block::Table(t) => Some(t.plain_text()),
                Block::PageBreak => None,
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(StyleSet::default())
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title, taken from the first title-page heading
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}
