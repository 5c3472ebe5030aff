//! # papersmith
//!
//! Render model-drafted academic papers into styled word-processor documents.
//!
//! The input is a constrained, markdown-like draft: `#`/`##`/`###` headings,
//! a `####TITLE PAGE####` block, `- ` or `1.` bullet items, `|a|b|` tables
//! and `**bold**` / `*italic*` spans. The output is a [`Document`] with custom
//! paragraph styles, US Letter geometry, margins, line spacing and a page
//! number footer, serializable to DOCX, JSON or plain text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use papersmith::{FormattingConfig, LineSpacing, Papersmith};
//!
//! fn main() -> papersmith::Result<()> {
//!     let draft = std::fs::read_to_string("draft.md")?;
//!
//!     let config = FormattingConfig::new()
//!         .with_font("Georgia")
//!         .with_line_spacing(LineSpacing::Double);
//!
//!     let bytes = Papersmith::new()
//!         .with_config(config)
//!         .with_author("Ada Lovelace")
//!         .render(&draft)?
//!         .to_docx()?;
//!     std::fs::write("paper.docx", bytes)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Styles**: Normal, title, three heading levels, bullets and grid tables,
//!   derived from one [`FormattingConfig`]
//! - **Total rendering**: any input produces a document; anomalies such as
//!   ragged tables become [`RenderWarning`]s
//! - **Output formats**: DOCX (feature `docx`), JSON, plain text
//! - **Prompt assembly**: build the drafting prompt from scripts,
//!   instructions and web sources, then draft through any [`TextGenerator`]

pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{
    export, DocumentExporter, ExportOptions, ExportResult, ExporterRegistry, OutputFormat,
};
pub use model::{
    Alignment, Block, Document, Footer, Metadata, PageSetup, Paragraph, RunKind, StyledRun,
    Table, TableCell, TableRow,
};
pub use parser::{BlockScanner, RawBlock};
pub use prompt::{PromptContext, PromptTemplate, SourceDocument, TextGenerator};
pub use render::{
    DocumentRenderer, JsonFormat, RenderOptions, RenderResult, RenderStats, RenderWarning,
};
pub use style::{configure, FormattingConfig, LineSpacing, StyleName, StyleSet};

/// Render a draft with the given formatting.
///
/// # Example
///
/// ```
/// use papersmith::{render, FormattingConfig, StyleName};
///
/// let doc = render("# Title", &FormattingConfig::default()).unwrap();
/// let heading = doc.paragraphs().next().unwrap();
/// assert_eq!(heading.style, StyleName::Heading1Custom);
/// assert_eq!(heading.plain_text(), "Title");
/// ```
pub fn render(text: &str, config: &FormattingConfig) -> Result<Document> {
    let styles = configure(config)?;
    Ok(DocumentRenderer::new(styles).render(text))
}

/// Render a draft straight to DOCX bytes.
///
/// # Example
///
/// ```no_run
/// use papersmith::{to_docx, FormattingConfig};
///
/// let bytes = to_docx("# Title\n\nBody", &FormattingConfig::default()).unwrap();
/// std::fs::write("paper.docx", bytes).unwrap();
/// ```
#[cfg(feature = "docx")]
pub fn to_docx(text: &str, config: &FormattingConfig) -> Result<Vec<u8>> {
    let doc = render(text, config)?;
    render::to_docx(&doc)
}

/// Render a draft to JSON.
pub fn to_json(text: &str, config: &FormattingConfig, format: JsonFormat) -> Result<String> {
    let doc = render(text, config)?;
    render::to_json(&doc, format)
}

/// Render a draft to plain text.
pub fn to_text(text: &str, config: &FormattingConfig) -> Result<String> {
    let doc = render(text, config)?;
    Ok(render::to_text(&doc))
}

/// Builder for rendering and drafting papers.
///
/// # Example
///
/// ```
/// use papersmith::Papersmith;
///
/// let result = Papersmith::new()
///     .without_page_numbers()
///     .render("# Intro\n\nSome *emphasis*.")?;
/// assert_eq!(result.stats.heading_count, 1);
/// assert!(result.document.footer.is_none());
/// # Ok::<(), papersmith::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Papersmith {
    config: FormattingConfig,
    render_options: RenderOptions,
    template: PromptTemplate,
}

impl Papersmith {
    /// Create a new builder with default formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formatting configuration.
    pub fn with_config(mut self, config: FormattingConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the font family.
    pub fn with_font(mut self, font_name: impl Into<String>) -> Self {
        self.config = self.config.with_font(font_name);
        self
    }

    /// Set the line spacing.
    pub fn with_line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.config = self.config.with_line_spacing(spacing);
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_author(author);
        self
    }

    /// Disable the page-number footer.
    pub fn without_page_numbers(mut self) -> Self {
        self.render_options = self.render_options.with_page_numbers(false);
        self
    }

    /// Set the prompt template used by [`draft`](Self::draft).
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// The formatting configuration.
    pub fn config(&self) -> &FormattingConfig {
        &self.config
    }

    /// Render a draft.
    pub fn render(&self, text: &str) -> Result<PapersmithResult> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let styles = configure(&self.config)?;
        let result = DocumentRenderer::with_options(styles, self.render_options.clone())
            .render_with_stats(text);

        Ok(PapersmithResult {
            document: result.document,
            stats: result.stats,
        })
    }

    /// Build the prompt, ask the generator for a draft and render it.
    pub fn draft(
        &self,
        generator: &dyn TextGenerator,
        ctx: &PromptContext,
    ) -> Result<PapersmithResult> {
        // reject bad formatting before paying for a generation
        self.config.validate()?;

        let prompt = prompt::build_prompt(&self.template, ctx)?;
        let text = generator.generate(&prompt)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Generation("generator returned an empty draft".into()));
        }

        self.render(text)
    }
}

/// A rendered paper.
#[derive(Debug, Clone)]
pub struct PapersmithResult {
    /// The rendered document
    pub document: Document,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl PapersmithResult {
    /// Convert to DOCX bytes.
    #[cfg(feature = "docx")]
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Warnings collected while rendering.
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.stats.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Papersmith::default();
        assert_eq!(builder.config, FormattingConfig::default());
        assert!(builder.render_options.page_numbers);
    }

    #[test]
    fn test_builder_chained() {
        let builder = Papersmith::new()
            .with_font("Arial")
            .with_line_spacing(LineSpacing::Single)
            .with_author("Ada")
            .without_page_numbers();

        assert_eq!(builder.config().font_name, "Arial");
        assert_eq!(builder.config().line_spacing, LineSpacing::Single);
        assert_eq!(builder.render_options.author.as_deref(), Some("Ada"));
        assert!(!builder.render_options.page_numbers);
    }

    #[test]
    fn test_render_empty_input() {
        assert!(matches!(Papersmith::new().render("\n  \n"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_render_invalid_config() {
        let config = FormattingConfig::new().with_font_sizes(0, 16, 14, 12);
        assert!(matches!(render("x", &config), Err(Error::Config(_))));
    }

    #[test]
    fn test_to_text_convenience() {
        let text = to_text("# A\n- b", &FormattingConfig::default()).unwrap();
        assert_eq!(text, "A\n\n- b");
    }

    #[test]
    fn test_result_warnings() {
        let result = Papersmith::new().render("|a|b|\n|c|").unwrap();
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_draft_with_closure() {
        let ctx = PromptContext::new("Ada", "Lovelace")
            .with_script(SourceDocument::new("s.txt", "notes"))
            .with_instruction(SourceDocument::new("i.txt", "brief"));
        let generator = |prompt: &str| -> Result<String> {
            assert!(prompt.contains("Ada Lovelace"));
            Ok("\n# Generated\n\nBody\n".to_string())
        };

        let result = Papersmith::new().draft(&generator, &ctx).unwrap();
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.paragraph_count, 1);
    }

    #[test]
    fn test_draft_empty_generation() {
        let ctx = PromptContext::new("Ada", "Lovelace")
            .with_script(SourceDocument::new("s.txt", "notes"))
            .with_instruction(SourceDocument::new("i.txt", "brief"));
        let generator = |_: &str| -> Result<String> { Ok("   ".to_string()) };

        assert!(matches!(
            Papersmith::new().draft(&generator, &ctx),
            Err(Error::Generation(_))
        ));
    }
}
