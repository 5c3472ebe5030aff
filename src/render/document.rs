//! Draft-to-document rendering.

use crate::model::{Alignment, Document, Footer, Paragraph, Table, TableCell, TableRow};
use crate::parser::{BlockScanner, InlineScanner, RawBlock};
use crate::style::{StyleName, StyleSet};
use log::{debug, warn};

use super::{RenderOptions, RenderResult, RenderStats, RenderWarning};

/// Renders draft text into a styled [`Document`].
///
/// The renderer holds the style set of one export and may be reused for any
/// number of drafts; no state survives between calls to [`render`].
///
/// [`render`]: DocumentRenderer::render
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    styles: StyleSet,
    options: RenderOptions,
    inline: InlineScanner,
}

impl DocumentRenderer {
    /// Create a renderer with default options.
    pub fn new(styles: StyleSet) -> Self {
        Self::with_options(styles, RenderOptions::default())
    }

    /// Create a renderer with explicit options.
    pub fn with_options(styles: StyleSet, options: RenderOptions) -> Self {
        Self {
            styles,
            options,
            inline: InlineScanner::new(),
        }
    }

    /// The style set blocks are bound to.
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// The rendering options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a draft. Total over all inputs.
    pub fn render(&self, text: &str) -> Document {
        self.render_with_stats(text).document
    }

    /// Render a draft and collect statistics and warnings.
    pub fn render_with_stats(&self, text: &str) -> RenderResult {
        let mut state = RenderState::new(self);

        for block in BlockScanner::new(text) {
            state.render_block(block);
        }

        let RenderState {
            mut doc, stats, ..
        } = state;

        if self.options.page_numbers {
            doc.set_footer(Footer::page_number());
        }

        debug!(
            "Rendered {} blocks ({} headings, {} tables, {} warnings)",
            doc.block_count(),
            stats.heading_count,
            stats.table_count,
            stats.warnings.len()
        );

        RenderResult::new(doc, stats)
    }
}

/// Per-call accumulation.
struct RenderState<'r> {
    renderer: &'r DocumentRenderer,
    doc: Document,
    stats: RenderStats,
}

impl<'r> RenderState<'r> {
    fn new(renderer: &'r DocumentRenderer) -> Self {
        let mut doc = Document::new(renderer.styles.clone());
        doc.metadata.author = renderer.options.author.clone();
        doc.metadata.created = renderer.options.created;

        Self {
            renderer,
            doc,
            stats: RenderStats::new(),
        }
    }

    fn render_block(&mut self, block: RawBlock<'_>) {
        match block {
            RawBlock::Blank => {}
            RawBlock::TitlePage { lines, terminated } => self.render_title_page(&lines, terminated),
            RawBlock::Heading { level, text } => self.render_heading(level, text),
            RawBlock::BulletItem(text) => {
                self.stats.add_bullet();
                self.stats.count_text(text);
                let runs = self.renderer.inline.scan(text);
                self.doc
                    .add_paragraph(Paragraph::with_runs(StyleName::ListBullet, runs));
            }
            RawBlock::Table(rows) => self.render_table(rows),
            RawBlock::Paragraph(text) => {
                self.stats.add_paragraph();
                self.stats.count_text(text);
                let runs = self.renderer.inline.scan(text);
                self.doc
                    .add_paragraph(Paragraph::with_runs(StyleName::Normal, runs));
            }
        }
    }

    fn render_title_page(&mut self, lines: &[&str], terminated: bool) {
        for line in lines {
            let paragraph = if line.starts_with('#') {
                let title = line.trim_start_matches('#').trim();
                if self.doc.metadata.title.is_none() && !title.is_empty() {
                    self.doc.metadata.title = Some(title.to_string());
                }
                Paragraph::with_text(StyleName::TitleStyle, title)
            } else {
                Paragraph::with_text(StyleName::Normal, *line)
            };
            self.stats.count_text(line);
            self.doc.add_paragraph(paragraph.align(Alignment::Center));
        }

        if !terminated {
            warn!("Title page is not closed, consumed to end of input");
            self.stats.add_warning(RenderWarning::UnterminatedTitlePage);
        }

        self.stats.add_title_page();
        self.stats.add_page_break();
        self.doc.add_page_break();
    }

    fn render_heading(&mut self, level: u8, text: &str) {
        let Some(style) = StyleName::heading(level) else {
            // the scanner only yields levels 1-3
            self.stats.add_paragraph();
            self.doc.add_paragraph(Paragraph::with_text(StyleName::Normal, text));
            return;
        };

        self.stats.add_heading();
        self.stats.count_text(text);
        self.doc.add_paragraph(Paragraph::with_text(style, text));
    }

    fn render_table(&mut self, rows: Vec<Vec<&str>>) {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            debug!("Skipping table without columns");
            return;
        }

        let index = self.stats.table_count as usize;
        let mut table = Table::new();

        for (row_idx, mut cells) in rows.into_iter().enumerate() {
            if cells.len() != columns {
                warn!(
                    "Table {} row {} has {} cells, expected {}",
                    index + 1,
                    row_idx + 1,
                    cells.len(),
                    columns
                );
                self.stats.add_warning(RenderWarning::MalformedTable {
                    table: index,
                    row: row_idx,
                    expected: columns,
                    found: cells.len(),
                });
                cells.resize(columns, "");
            }

            for cell in &cells {
                self.stats.count_text(cell);
            }
            table.add_row(TableRow::new(cells.into_iter().map(TableCell::text).collect()));
        }

        self.stats.add_table();
        self.doc.add_table(table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, RunKind, StyledRun};

    fn render(text: &str) -> Document {
        DocumentRenderer::new(StyleSet::default()).render(text)
    }

    fn paragraph(block: &Block) -> &Paragraph {
        block.as_paragraph().expect("paragraph block")
    }

    #[test]
    fn test_heading() {
        let doc = render("# Title");
        assert_eq!(doc.block_count(), 1);
        let p = paragraph(&doc.blocks[0]);
        assert_eq!(p.style, StyleName::Heading1Custom);
        assert_eq!(p.plain_text(), "Title");
    }

    #[test]
    fn test_heading_markup_kept_literal() {
        let doc = render("## A **bold** claim");
        let p = paragraph(&doc.blocks[0]);
        assert_eq!(p.style, StyleName::Heading2Custom);
        assert_eq!(p.runs, vec![StyledRun::plain("A **bold** claim")]);
    }

    #[test]
    fn test_paragraph_runs() {
        let doc = render("a **b** c *d* e");
        let p = paragraph(&doc.blocks[0]);
        assert_eq!(p.style, StyleName::Normal);
        let kinds: Vec<_> = p.runs.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RunKind::Plain,
                RunKind::Bold,
                RunKind::Plain,
                RunKind::Italic,
                RunKind::Plain
            ]
        );
    }

    #[test]
    fn test_bullets() {
        let doc = render("1. item\n- *item*");
        assert_eq!(doc.block_count(), 2);
        assert!(paragraph(&doc.blocks[0]).is_bullet());
        assert_eq!(paragraph(&doc.blocks[0]).plain_text(), "item");
        assert_eq!(paragraph(&doc.blocks[1]).runs, vec![StyledRun::italic("item")]);
    }

    #[test]
    fn test_title_page() {
        let doc = render(
            "####TITLE PAGE####\n# My Paper\nJohn Doe\n####END TITLE PAGE####\nBody",
        );
        assert_eq!(doc.block_count(), 4);

        let title = paragraph(&doc.blocks[0]);
        assert_eq!(title.style, StyleName::TitleStyle);
        assert_eq!(title.plain_text(), "My Paper");
        assert_eq!(title.alignment, Some(Alignment::Center));

        let author = paragraph(&doc.blocks[1]);
        assert_eq!(author.style, StyleName::Normal);
        assert_eq!(author.plain_text(), "John Doe");
        assert_eq!(author.alignment, Some(Alignment::Center));

        assert!(doc.blocks[2].is_page_break());

        let body = paragraph(&doc.blocks[3]);
        assert_eq!(body.plain_text(), "Body");
        assert_eq!(body.alignment, None);

        assert_eq!(doc.metadata.title.as_deref(), Some("My Paper"));
    }

    #[test]
    fn test_title_page_keeps_blank_lines() {
        let doc = render("####TITLE PAGE####\n### Paper\n\nDate\n####END TITLE PAGE####");
        assert_eq!(doc.block_count(), 4);
        assert!(paragraph(&doc.blocks[1]).is_empty());
        assert_eq!(paragraph(&doc.blocks[1]).alignment, Some(Alignment::Center));
    }

    #[test]
    fn test_unterminated_title_page() {
        let result = DocumentRenderer::new(StyleSet::default())
            .render_with_stats("####TITLE PAGE####\n# Paper\n- Author");
        let doc = &result.document;

        assert_eq!(doc.block_count(), 3);
        assert_eq!(paragraph(&doc.blocks[1]).plain_text(), "- Author");
        assert!(doc.blocks[2].is_page_break());
        assert_eq!(result.stats.warnings, vec![RenderWarning::UnterminatedTitlePage]);
    }

    #[test]
    fn test_table() {
        let doc = render("|A|B|\n|-|-|\n|1|2|");
        let tables: Vec<_> = doc.tables().collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].to_strings(), vec![vec!["A", "B"], vec!["1", "2"]]);
        assert_eq!(tables[0].style, StyleName::TableGrid);

        let cell = &tables[0].rows[0].cells[0].paragraph;
        assert_eq!(cell.style, StyleName::Normal);
        assert_eq!(cell.alignment, Some(Alignment::Left));
    }

    #[test]
    fn test_ragged_table_padded_and_truncated() {
        let result = DocumentRenderer::new(StyleSet::default())
            .render_with_stats("|A|B|C|\n|1|\n|x|y|z|w|");
        let table = result.document.tables().next().unwrap();

        assert_eq!(
            table.to_strings(),
            vec![vec!["A", "B", "C"], vec!["1", "", ""], vec!["x", "y", "z"]]
        );
        assert_eq!(
            result.stats.warnings,
            vec![
                RenderWarning::MalformedTable {
                    table: 0,
                    row: 1,
                    expected: 3,
                    found: 1
                },
                RenderWarning::MalformedTable {
                    table: 0,
                    row: 2,
                    expected: 3,
                    found: 4
                },
            ]
        );
    }

    #[test]
    fn test_table_cells_skip_inline_markup() {
        let doc = render("|**x**|");
        let table = doc.tables().next().unwrap();
        assert_eq!(table.rows[0].cells[0].plain_text(), "**x**");
    }

    #[test]
    fn test_empty_table_skipped() {
        let doc = render("||\n|-|");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_footer() {
        let doc = render("text");
        assert_eq!(doc.footer, Some(Footer::page_number()));

        let renderer = DocumentRenderer::with_options(
            StyleSet::default(),
            RenderOptions::new().with_page_numbers(false),
        );
        assert!(renderer.render("text").footer.is_none());
    }

    #[test]
    fn test_stats() {
        let result = DocumentRenderer::new(StyleSet::default())
            .render_with_stats("# Intro\n\nSome words here.\n- one\n|a|b|");
        let stats = &result.stats;
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.bullet_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.word_count, 7);
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_empty_input() {
        let doc = render("");
        assert!(doc.is_empty());
        assert!(doc.footer.is_some());
    }

    #[test]
    fn test_idempotent() {
        let renderer = DocumentRenderer::new(StyleSet::default());
        let text = "####TITLE PAGE####\n# T\n####END TITLE PAGE####\n# H\n|a|\n- b *c*";
        assert_eq!(renderer.render(text), renderer.render(text));
    }

    #[test]
    fn test_metadata_from_options() {
        let renderer = DocumentRenderer::with_options(
            StyleSet::default(),
            RenderOptions::new().with_author("Ada"),
        );
        assert_eq!(renderer.render("x").metadata.author.as_deref(), Some("Ada"));
    }
}
