//! Source material supplied with a drafting request.

use serde::{Deserialize, Serialize};

/// Marker closing every formatted source entry.
pub const DOCUMENT_SEPARATOR: &str = "!!!this is the next document!!!";

/// An uploaded script or instruction file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// File name shown to the model
    pub name: String,

    /// Extracted text
    pub content: String,
}

impl SourceDocument {
    /// Create a new source document.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A web page the user added by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    pub url: String,
    pub author: String,
    pub date: String,
    pub content: String,
}

/// A result returned by the search collaborator. Missing fields take the
/// placeholders the prompt expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default = "unknown_title")]
    pub title: String,

    #[serde(default = "unknown_url")]
    pub url: String,

    #[serde(default = "unknown_title")]
    pub author: String,

    #[serde(default = "not_available")]
    pub date_retrieved: String,

    #[serde(default = "no_content")]
    pub content: String,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            title: unknown_title(),
            url: unknown_url(),
            author: unknown_title(),
            date_retrieved: not_available(),
            content: no_content(),
        }
    }
}

fn unknown_title() -> String {
    "Unknown".to_string()
}

fn unknown_url() -> String {
    "unknown".to_string()
}

fn not_available() -> String {
    "N/A".to_string()
}

fn no_content() -> String {
    "No content available".to_string()
}

fn join_entries(entries: impl Iterator<Item = String>) -> String {
    entries.collect::<Vec<_>>().join("\n\n")
}

/// Format uploaded scripts, numbered from 1.
pub fn format_scripts(scripts: &[SourceDocument]) -> String {
    format_documents("Script", scripts)
}

/// Format uploaded instructions, numbered from 1.
pub fn format_instructions(instructions: &[SourceDocument]) -> String {
    format_documents("Instruction", instructions)
}

fn format_documents(label: &str, docs: &[SourceDocument]) -> String {
    join_entries(docs.iter().enumerate().map(|(i, doc)| {
        format!(
            "{} {} ({}):\n{}\n{}",
            label,
            i + 1,
            doc.name,
            doc.content,
            DOCUMENT_SEPARATOR
        )
    }))
}

/// Format web sources, numbered from 1.
pub fn format_web_sources(sources: &[WebSource]) -> String {
    join_entries(sources.iter().enumerate().map(|(i, s)| {
        format!(
            "Internet Source {} (URL: {}, Author: {}, Date: {}):\n{}\n{}",
            i + 1,
            s.url,
            s.author,
            s.date,
            s.content,
            DOCUMENT_SEPARATOR
        )
    }))
}

/// Format search results, numbered from 1.
pub fn format_search_results(results: &[SearchResult]) -> String {
    join_entries(results.iter().enumerate().map(|(i, r)| {
        format!(
            "Internet Search Result {} (Title: {}, URL: {}, Author: {}, Date Retrieved: {}):\n{}\n{}",
            i + 1,
            r.title,
            r.url,
            r.author,
            r.date_retrieved,
            r.content,
            DOCUMENT_SEPARATOR
        )
    }))
}
