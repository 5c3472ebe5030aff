//! Export boundary: draft text in, serialized document out.
//!
//! [`export`] is the single entry point the surrounding application calls.
//! It rejects empty input, configures styles, renders and serializes, so
//! every failure is reported once, as a typed [`Error`].
//!
//! # Example
//!
//! ```
//! use papersmith::export::{export, ExportOptions, OutputFormat};
//! use papersmith::FormattingConfig;
//!
//! fn main() -> papersmith::Result<()> {
//!     let options = ExportOptions::new().with_format(OutputFormat::Text);
//!     let result = export("# Intro\n\nHello **world**", &FormattingConfig::default(), &options)?;
//!     assert_eq!(result.mime_type, "text/plain");
//!     Ok(())
//! }
//! ```

mod formats;

#[cfg(feature = "docx")]
pub use formats::DocxExporter;
pub use formats::{JsonExporter, TextExporter};

use crate::error::{Error, Result};
use crate::model::{Document, Metadata};
use crate::render::{DocumentRenderer, JsonFormat, RenderOptions, RenderStats};
use crate::style::{configure, FormattingConfig};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Options for one export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Output format
    pub format: OutputFormat,

    /// Rendering options
    pub render: RenderOptions,

    /// Layout of JSON output
    pub json_format: JsonFormat,
}

impl ExportOptions {
    /// Create new export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

/// Output format for an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Word-processor document
    #[cfg(feature = "docx")]
    #[default]
    Docx,

    /// JSON dump of the document model
    #[cfg_attr(not(feature = "docx"), default)]
    Json,

    /// Plain text
    Text,
}

impl OutputFormat {
    /// Default file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            #[cfg(feature = "docx")]
            OutputFormat::Docx => "docx",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }

    /// Pick a format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            #[cfg(feature = "docx")]
            "docx" => Some(OutputFormat::Docx),
            "json" => Some(OutputFormat::Json),
            "txt" | "text" => Some(OutputFormat::Text),
            _ => None,
        }
    }

    fn exporter(&self) -> Arc<dyn DocumentExporter> {
        match self {
            #[cfg(feature = "docx")]
            OutputFormat::Docx => Arc::new(DocxExporter),
            OutputFormat::Json => Arc::new(JsonExporter),
            OutputFormat::Text => Arc::new(TextExporter),
        }
    }
}

/// Result of an export.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Serialized document
    pub bytes: Vec<u8>,

    /// MIME type of `bytes`
    pub mime_type: &'static str,

    /// Metadata of the rendered document
    pub metadata: Metadata,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl ExportResult {
    /// Get output length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the output is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the output to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Trait for document exporters.
///
/// Implement this trait to add an output format.
pub trait DocumentExporter: Send + Sync {
    /// Get the name of this exporter.
    fn name(&self) -> &str;

    /// File extensions this exporter writes, lowercase without the dot.
    fn extensions(&self) -> &[&str];

    /// MIME type of the output.
    fn mime_type(&self) -> &'static str;

    /// Serialize a rendered document.
    fn export(&self, doc: &Document, options: &ExportOptions) -> Result<Vec<u8>>;

    /// Check if this exporter writes the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Export a draft with the format named in `options`.
pub fn export(
    text: &str,
    config: &FormattingConfig,
    options: &ExportOptions,
) -> Result<ExportResult> {
    export_with(options.format.exporter().as_ref(), text, config, options)
}

fn export_with(
    exporter: &dyn DocumentExporter,
    text: &str,
    config: &FormattingConfig,
    options: &ExportOptions,
) -> Result<ExportResult> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let styles = configure(config)?;
    let result =
        DocumentRenderer::with_options(styles, options.render.clone()).render_with_stats(text);
    let bytes = exporter.export(&result.document, options)?;

    log::debug!(
        "Exported {} blocks as {} ({} bytes)",
        result.document.block_count(),
        exporter.name(),
        bytes.len()
    );

    Ok(ExportResult {
        bytes,
        mime_type: exporter.mime_type(),
        metadata: result.document.metadata,
        stats: result.stats,
    })
}

/// Registry of exporters keyed by file extension.
pub struct ExporterRegistry {
    exporters: HashMap<String, Arc<dyn DocumentExporter>>,
    by_name: HashMap<String, Arc<dyn DocumentExporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in exporters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        #[cfg(feature = "docx")]
        registry.register(Arc::new(DocxExporter));
        registry.register(Arc::new(JsonExporter));
        registry.register(Arc::new(TextExporter));
        registry
    }

    /// Register an exporter for all its extensions.
    pub fn register(&mut self, exporter: Arc<dyn DocumentExporter>) {
        for ext in exporter.extensions() {
            self.exporters.insert(ext.to_lowercase(), exporter.clone());
        }
        self.by_name.insert(exporter.name().to_lowercase(), exporter);
    }

    /// Get an exporter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentExporter>> {
        self.exporters.get(&ext.to_lowercase()).cloned()
    }

    /// Get an exporter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentExporter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.exporters.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.exporters.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Export a draft with the exporter registered for `ext`.
    pub fn export(
        &self,
        text: &str,
        ext: &str,
        config: &FormattingConfig,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        let exporter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::Other(format!("No exporter for extension: {}", ext)))?;
        export_with(exporter.as_ref(), text, config, options)
    }

    /// Export a draft and write it to `path`, choosing the exporter from
    /// the path's extension.
    pub fn export_to_path(
        &self,
        text: &str,
        path: &Path,
        config: &FormattingConfig,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other("Output file has no extension".into()))?;

        let result = self.export(text, ext, config, options)?;
        result.save(path)?;
        Ok(result)
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
