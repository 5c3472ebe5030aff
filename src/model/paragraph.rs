//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

use crate::style::StyleName;

/// A paragraph bound to one of the configured styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Style the paragraph is rendered with
    pub style: StyleName,

    /// Explicit alignment, `None` inherits the style's alignment
    pub alignment: Option<Alignment>,

    /// Runs in source order
    pub runs: Vec<StyledRun>,
}

impl Paragraph {
    /// Create an empty paragraph with the given style.
    pub fn new(style: StyleName) -> Self {
        Self {
            style,
            alignment: None,
            runs: Vec::new(),
        }
    }

    /// Create a paragraph holding a single plain run.
    pub fn with_text(style: StyleName, text: impl Into<String>) -> Self {
        let mut p = Self::new(style);
        p.add_run(StyledRun::plain(text));
        p
    }

    /// Create a paragraph from already scanned runs.
    pub fn with_runs(style: StyleName, runs: Vec<StyledRun>) -> Self {
        let mut p = Self::new(style);
        for run in runs {
            p.add_run(run);
        }
        p
    }

    /// Set an explicit alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Append a run. Runs without text are dropped.
    pub fn add_run(&mut self, run: StyledRun) {
        if !run.is_empty() {
            self.runs.push(run);
        }
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Get the heading level (1-3) or None.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level()
    }

    /// Check if this is a bullet item.
    pub fn is_bullet(&self) -> bool {
        self.style == StyleName::ListBullet
    }
}

/// Inline style of a run. Bold and italic never combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    /// Unstyled text
    #[default]
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
}

/// A run of text with one inline style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    /// Inline style
    pub kind: RunKind,

    /// The text content, without markup delimiters
    pub text: String,
}

impl StyledRun {
    /// Create a run of the given kind.
    pub fn new(kind: RunKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(RunKind::Plain, text)
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(RunKind::Bold, text)
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(RunKind::Italic, text)
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}
