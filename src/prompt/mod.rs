//! Prompt assembly for drafting requests.
//!
//! The uploaded scripts, instructions and web sources are formatted into a
//! single prompt from a [`PromptTemplate`]. Sending the prompt is left to a
//! [`TextGenerator`] supplied by the caller; this crate performs no network
//! I/O.

mod sources;
mod template;

pub use sources::{
    format_instructions, format_scripts, format_search_results, format_web_sources, SearchResult,
    SourceDocument, WebSource, DOCUMENT_SEPARATOR,
};
pub use template::{PromptContext, PromptTemplate, DEFAULT_TEMPLATE, PLACEHOLDERS};

use crate::error::Result;

/// Something that turns a prompt into draft text, usually a language model
/// API client.
pub trait TextGenerator: Send + Sync {
    /// Generate a draft for the prompt.
    fn generate(&self, prompt: &str) -> Result<String>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String> {
        self(prompt)
    }
}

/// Validate the context and render the prompt.
pub fn build_prompt(template: &PromptTemplate, ctx: &PromptContext) -> Result<String> {
    ctx.validate()?;
    let prompt = template.render(ctx)?;
    log::debug!(
        "Built prompt from {} scripts, {} instructions, {} web sources, {} search results ({} chars)",
        ctx.scripts.len(),
        ctx.instructions.len(),
        ctx.web_sources.len(),
        ctx.search_results.len(),
        prompt.len()
    );
    Ok(prompt)
}
