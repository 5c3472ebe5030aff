//! Built-in exporters.

use crate::error::Result;
use crate::model::Document;
use crate::render::{to_json, to_text};

use super::{DocumentExporter, ExportOptions};

/// Word-processor (`.docx`) exporter.
#[cfg(feature = "docx")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExporter;

#[cfg(feature = "docx")]
impl DocumentExporter for DocxExporter {
    fn name(&self) -> &str {
        "docx"
    }

    fn extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }

    fn export(&self, doc: &Document, _options: &ExportOptions) -> Result<Vec<u8>> {
        crate::render::to_docx(doc)
    }
}

/// JSON exporter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl DocumentExporter for JsonExporter {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn export(&self, doc: &Document, options: &ExportOptions) -> Result<Vec<u8>> {
        Ok(to_json(doc, options.json_format)?.into_bytes())
    }
}

/// Plain text exporter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl DocumentExporter for TextExporter {
    fn name(&self) -> &str {
        "text"
    }

    fn extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn export(&self, doc: &Document, _options: &ExportOptions) -> Result<Vec<u8>> {
        Ok(to_text(doc).into_bytes())
    }
}
