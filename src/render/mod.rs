//! Rendering module: draft text to [`Document`](crate::model::Document), and
//! documents to output formats.

mod document;
#[cfg(feature = "docx")]
mod docx;
mod json;
mod options;
mod result;
mod text;

pub use document::DocumentRenderer;
#[cfg(feature = "docx")]
pub use docx::{to_docx, DocxWriter};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats, RenderWarning};
pub use text::to_text;
