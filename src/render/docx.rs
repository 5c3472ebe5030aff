//! DOCX serialization through `docx-rs`.

use crate::error::{Error, Result};
use crate::model::{
    points_to_twips, Alignment, Block, Document, Footer, FooterField, Paragraph, RunKind,
    StyledRun, Table,
};
use crate::style::{StyleDef, StyleKind, StyleName, StyleSet};
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, FieldCharType, IndentLevel, InstrPAGE,
    InstrText, Level, LevelJc, LevelText, LineSpacing, LineSpacingType, NumberFormat, Numbering,
    NumberingId, PageMargin, Run, RunFonts, SpecialIndentType, Start, Style, StyleType,
    TableCell as DocxTableCell, TableRow as DocxTableRow,
};
use std::io::Cursor;

/// Numbering id shared by every bullet item.
const BULLET_NUMBERING_ID: usize = 1;

/// Built-in heading styles the custom headings are based on.
const BASE_HEADINGS: [(&str, &str); 3] = [
    ("Heading1", "heading 1"),
    ("Heading2", "heading 2"),
    ("Heading3", "heading 3"),
];

/// Convert a document to DOCX bytes.
pub fn to_docx(doc: &Document) -> Result<Vec<u8>> {
    DocxWriter::new().write(doc)
}

/// Writes a [`Document`] as a word-processor package.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxWriter;

impl DocxWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Build the in-memory `docx-rs` document.
    pub fn build(&self, doc: &Document) -> Docx {
        let setup = doc.page_setup();
        let margins = setup.margins;

        let mut docx = Docx::new().page_size(setup.width, setup.height).page_margin(
            PageMargin::new()
                .top(margins.top as i32)
                .bottom(margins.bottom as i32)
                .left(margins.left as i32)
                .right(margins.right as i32),
        );

        docx = self.add_styles(docx, &doc.styles);
        docx = self.add_bullet_numbering(docx);

        for block in &doc.blocks {
            docx = match block {
                Block::Paragraph(p) => docx.add_paragraph(self.paragraph(p)),
                Block::Table(t) => docx.add_table(self.table(t)),
                Block::PageBreak => docx.add_paragraph(
                    docx_rs::Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
                ),
            };
        }

        if let Some(footer) = &doc.footer {
            docx = docx.footer(self.footer(footer));
        }

        docx
    }

    /// Build and pack the document into bytes.
    pub fn write(&self, doc: &Document) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.build(doc)
            .build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| Error::Render(format!("Failed to pack DOCX: {}", e)))?;

        log::debug!("Packed DOCX ({} bytes)", buffer.len());
        Ok(buffer)
    }

    fn add_styles(&self, mut docx: Docx, styles: &StyleSet) -> Docx {
        // docx-rs always writes its own empty Normal style, so Normal lives
        // in the document defaults instead
        if let Some(normal) = styles.get(StyleName::Normal) {
            docx = docx
                .default_fonts(run_fonts(&normal.font_family))
                .default_size(normal.size_pt as usize * 2);
            if let Some(spacing) = normal.line_spacing_pt {
                docx = docx.default_line_spacing(exact_spacing(spacing));
            }
        }

        for (id, name) in BASE_HEADINGS {
            docx = docx.add_style(Style::new(id, StyleType::Paragraph).name(name).bold());
        }

        for (name, def) in styles.iter().filter(|(name, _)| *name != StyleName::Normal) {
            docx = docx.add_style(self.style(name, def));
        }
        docx
    }

    fn style(&self, name: StyleName, def: &StyleDef) -> Style {
        let kind = match def.kind {
            StyleKind::Paragraph => StyleType::Paragraph,
            StyleKind::Table => StyleType::Table,
        };

        let mut style = Style::new(name.as_str(), kind)
            .name(name.display_name())
            .fonts(run_fonts(&def.font_family))
            .size(def.size_pt as usize * 2);

        if def.bold {
            style = style.bold();
        }
        if let Some(spacing) = def.line_spacing_pt {
            style = style.line_spacing(exact_spacing(spacing));
        }
        if let Some(base) = &def.based_on {
            style = style.based_on(base.as_str());
        }
        style
    }

    fn add_bullet_numbering(&self, docx: Docx) -> Docx {
        let level = Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(
            Some(720),
            Some(SpecialIndentType::Hanging(360)),
            None,
            None,
        );

        docx.add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(level))
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID))
    }

    fn paragraph(&self, p: &Paragraph) -> docx_rs::Paragraph {
        let mut para = docx_rs::Paragraph::new().style(p.style.as_str());

        if let Some(alignment) = p.alignment {
            para = para.align(alignment_type(alignment));
        }
        if p.is_bullet() {
            para = para.numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
        }

        for run in &p.runs {
            para = para.add_run(self.run(run));
        }
        para
    }

    fn run(&self, run: &StyledRun) -> Run {
        let r = Run::new().add_text(&run.text);
        match run.kind {
            RunKind::Plain => r,
            RunKind::Bold => r.bold(),
            RunKind::Italic => r.italic(),
        }
    }

    fn table(&self, table: &Table) -> docx_rs::Table {
        let rows = table
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .cells
                    .iter()
                    .map(|cell| DocxTableCell::new().add_paragraph(self.paragraph(&cell.paragraph)))
                    .collect();
                DocxTableRow::new(cells)
            })
            .collect();

        docx_rs::Table::new(rows).style(table.style.as_str())
    }

    fn footer(&self, footer: &Footer) -> docx_rs::Footer {
        let instr = match footer.field {
            FooterField::PageNumber => InstrText::PAGE(InstrPAGE::new()),
        };
        // cached result shown until the viewer updates the field
        let field = Run::new()
            .add_field_char(FieldCharType::Begin, false)
            .add_instr_text(instr)
            .add_field_char(FieldCharType::Separate, false)
            .add_text("1")
            .add_field_char(FieldCharType::End, false);

        docx_rs::Footer::new().add_paragraph(
            docx_rs::Paragraph::new()
                .align(alignment_type(footer.alignment))
                .add_run(field),
        )
    }
}

fn run_fonts(font: &str) -> RunFonts {
    RunFonts::new()
        .ascii(font)
        .hi_ansi(font)
        .east_asia(font)
        .cs(font)
}

fn exact_spacing(points: f32) -> LineSpacing {
    LineSpacing::new()
        .line_rule(LineSpacingType::Exact)
        .line(points_to_twips(points) as i32)
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DocumentRenderer;
    use crate::style::{configure, FormattingConfig, LineSpacing};
    use docx_rs::DocumentChild;

    fn render(text: &str) -> Document {
        DocumentRenderer::new(StyleSet::default()).render(text)
    }

    #[test]
    fn test_to_docx_is_zip() {
        let doc = render("# Title\n\nBody with **bold** text.\n- item\n|a|b|");
        let bytes = to_docx(&doc).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_block_mapping() {
        let doc = render("####TITLE PAGE####\n# T\n####END TITLE PAGE####\n# H\n|a|b|");
        let docx = DocxWriter::new().build(&doc);
        let children = &docx.document.children;

        // title line, page break paragraph, heading, table
        assert_eq!(children.len(), 4);
        assert!(matches!(children[1], DocumentChild::Paragraph(_)));
        assert!(matches!(children[3], DocumentChild::Table(_)));
    }

    #[test]
    fn test_empty_document_packs() {
        let bytes = to_docx(&Document::default()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    fn xml(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_single_normal_style() {
        let package = DocxWriter::new().build(&render("Body")).build();
        let styles = xml(package.styles);

        assert_eq!(styles.matches(r#"w:styleId="Normal""#).count(), 1);
        assert_eq!(styles.matches(r#"w:styleId="ListBullet""#).count(), 1);
        assert_eq!(styles.matches(r#"w:styleId="Heading1Custom""#).count(), 1);
    }

    #[test]
    fn test_normal_in_document_defaults() {
        let package = DocxWriter::new().build(&render("Body")).build();
        let styles = xml(package.styles);
        let defaults_end = styles.find("</w:docDefaults>").unwrap();
        let defaults = &styles[..defaults_end];

        assert!(defaults.contains(r#"w:ascii="Times New Roman""#));
        assert!(defaults.contains(r#"w:sz w:val="24""#));
        assert!(defaults.contains(r#"w:line="360""#));
        assert!(defaults.contains(r#"w:lineRule="exact""#));
    }

    #[test]
    fn test_style_properties() {
        let config = FormattingConfig::new()
            .with_font("Georgia")
            .with_line_spacing(LineSpacing::Double);
        let doc = DocumentRenderer::new(configure(&config).unwrap()).render("# H");
        let styles = xml(DocxWriter::new().build(&doc).build().styles);

        let heading = &styles[styles.find(r#"w:styleId="Heading1Custom""#).unwrap()..];
        let heading = &heading[..heading.find("</w:style>").unwrap()];
        assert!(heading.contains(r#"w:ascii="Georgia""#));
        assert!(heading.contains(r#"w:sz w:val="32""#));
        assert!(heading.contains("<w:b />"));
        assert!(heading.contains(r#"w:line="480""#));
        assert!(heading.contains(r#"w:basedOn w:val="Heading1""#));
    }

    #[test]
    fn test_page_geometry() {
        let config = FormattingConfig::new().with_margins(2.54, 2.0, 3.0, 2.5);
        let doc = DocumentRenderer::new(configure(&config).unwrap()).render("Body");
        let document = xml(DocxWriter::new().build(&doc).build().document);

        assert!(document.contains(r#"w:w="12240" w:h="15840""#));
        assert!(document.contains(r#"w:top="1440" w:right="1417" w:bottom="1134" w:left="1701""#));
    }

    #[test]
    fn test_bullet_numbering() {
        let package = DocxWriter::new().build(&render("- item\nplain")).build();
        let document = xml(package.document);
        let numberings = xml(package.numberings);

        assert_eq!(document.matches("<w:numPr>").count(), 1);
        assert!(document.contains(r#"w:numId w:val="1""#));
        assert!(numberings.contains(r#"w:numFmt w:val="bullet""#));
    }

    #[test]
    fn test_footer_page_field() {
        let package = DocxWriter::new().build(&render("Body")).build();
        assert_eq!(package.footers.len(), 1);

        let footer = xml(package.footers[0].clone());
        let begin = footer.find(r#"w:fldCharType="begin""#).unwrap();
        let instr = footer.find("PAGE</w:instrText>").unwrap();
        let separate = footer.find(r#"w:fldCharType="separate""#).unwrap();
        let end = footer.find(r#"w:fldCharType="end""#).unwrap();
        assert!(begin < instr && instr < separate && separate < end);
        assert!(footer.contains(r#"w:jc w:val="center""#));
    }

    #[test]
    fn test_no_footer_without_page_numbers() {
        let doc = DocumentRenderer::with_options(
            StyleSet::default(),
            crate::render::RenderOptions::new().with_page_numbers(false),
        )
        .render("Body");
        assert!(DocxWriter::new().build(&doc).build().footers.is_empty());
    }

    #[test]
    fn test_alignment_mapping() {
        assert!(matches!(alignment_type(Alignment::Center), AlignmentType::Center));
        assert!(matches!(alignment_type(Alignment::Justify), AlignmentType::Both));
    }
}
