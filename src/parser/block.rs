//! Line classification into raw blocks.

use super::table::{is_table_line, parse_table};
use std::iter::Peekable;
use std::str::Lines;

/// Line that opens a title page.
pub const TITLE_PAGE_START: &str = "####TITLE PAGE####";

/// Line that closes a title page.
pub const TITLE_PAGE_END: &str = "####END TITLE PAGE####";

/// A classified unit of input, borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBlock<'a> {
    /// Lines between the title-page markers, trimmed, blank lines kept
    TitlePage {
        lines: Vec<&'a str>,
        /// False when the input ended before the end marker
        terminated: bool,
    },

    /// `#`, `##` or `###` heading
    Heading { level: u8, text: &'a str },

    /// `- item` or `1. item`, list marker removed
    BulletItem(&'a str),

    /// Parsed table rows, divider row removed
    Table(Vec<Vec<&'a str>>),

    /// Any other non-blank line
    Paragraph(&'a str),

    /// A line that is empty after trimming
    Blank,
}

/// Lazily classifies the lines of a draft.
///
/// Every line ends up in exactly one block; the last branch is a catch-all
/// paragraph, so classification never fails.
pub struct BlockScanner<'a> {
    lines: Peekable<Lines<'a>>,
}

impl<'a> BlockScanner<'a> {
    /// Create a scanner over the given text.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().peekable(),
        }
    }

    fn title_page(&mut self) -> RawBlock<'a> {
        let mut lines = Vec::new();
        for line in self.lines.by_ref() {
            let line = line.trim();
            if line == TITLE_PAGE_END {
                return RawBlock::TitlePage {
                    lines,
                    terminated: true,
                };
            }
            lines.push(line);
        }
        RawBlock::TitlePage {
            lines,
            terminated: false,
        }
    }

    fn table(&mut self, first: &'a str) -> RawBlock<'a> {
        let mut lines = vec![first];
        while let Some(line) = self.lines.next_if(|l| is_table_line(l.trim())) {
            lines.push(line.trim());
        }
        RawBlock::Table(parse_table(&lines))
    }
}

impl<'a> Iterator for BlockScanner<'a> {
    type Item = RawBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?.trim();

        let block = if line.is_empty() {
            RawBlock::Blank
        } else if line == TITLE_PAGE_START {
            self.title_page()
        } else if let Some(block) = classify_heading(line) {
            block
        } else if is_bullet(line) {
            RawBlock::BulletItem(strip_bullet_marker(line))
        } else if is_table_line(line) {
            self.table(line)
        } else {
            RawBlock::Paragraph(line)
        };

        Some(block)
    }
}

fn classify_heading(line: &str) -> Option<RawBlock<'_>> {
    let (level, text) = if let Some(rest) = line.strip_prefix("# ") {
        (1, rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        (2, rest)
    } else if let Some(rest) = line.strip_prefix("### ") {
        (3, rest)
    } else {
        return None;
    };

    Some(RawBlock::Heading {
        level,
        text: text.trim(),
    })
}

/// Check for a `- ` or `<digits>.` list marker.
pub fn is_bullet(line: &str) -> bool {
    if line.starts_with("- ") {
        return true;
    }
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line.as_bytes().get(digits) == Some(&b'.')
}

/// Remove every leading digit, dot, dash and space.
///
/// Ordered numbering is discarded along with the marker, so `"1. 2024 data"`
/// loses the year as well.
pub fn strip_bullet_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == '-' || c == ' ')
}
