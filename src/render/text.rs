//! Plain text rendering for documents.

use crate::model::{Block, Document};

/// Convert a document to plain text.
///
/// Blocks are separated by blank lines, bullet items are prefixed with
/// `- `, table cells are tab-separated and page breaks become form feeds.
pub fn to_text(doc: &Document) -> String {
    let mut output = String::new();

    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => {
                if p.is_bullet() {
                    output.push_str("- ");
                }
                output.push_str(&p.plain_text());
                output.push_str("\n\n");
            }
            Block::Table(t) => {
                output.push_str(&t.plain_text());
                output.push_str("\n\n");
            }
            Block::PageBreak => output.push('\x0c'),
        }
    }

    output.trim_end_matches('\n').to_string()
}
