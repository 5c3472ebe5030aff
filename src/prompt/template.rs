//! Prompt templates with `{name}` placeholders.

use super::sources::{
    format_instructions, format_scripts, format_search_results, format_web_sources,
    SearchResult, SourceDocument, WebSource,
};
use crate::error::{Error, Result};
use chrono::Local;

/// Placeholders a template may reference.
pub const PLACEHOLDERS: [&str; 6] = [
    "scripts",
    "instructions",
    "internet",
    "first_name",
    "last_name",
    "date",
];

/// Template used when the user has not customized the prompt.
pub const DEFAULT_TEMPLATE: &str = r####"
You are writing an academic paper on behalf of {first_name} {last_name}, dated {date}.

Follow these instructions:
{instructions}

Base the paper on these scripts:
{scripts}

Use these internet sources where relevant and cite them:
{internet}

Format the paper with the following markup only:
- Open the title page with ####TITLE PAGE#### and close it with ####END TITLE PAGE####; put the title on a line starting with #, followed by the author name and date.
- Use "# ", "## " and "### " for headings.
- Use "- " for bullet points.
- Use |cell|cell| rows for tables, with a |---|---| divider after the header.
- Use **bold** and *italic* for emphasis.
"####;

/// Everything a drafting request is built from.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    /// Uploaded scripts
    pub scripts: Vec<SourceDocument>,

    /// Uploaded instructions
    pub instructions: Vec<SourceDocument>,

    /// Web pages added by URL
    pub web_sources: Vec<WebSource>,

    /// Results from the search collaborator
    pub search_results: Vec<SearchResult>,

    /// Author first name
    pub first_name: String,

    /// Author last name
    pub last_name: String,

    /// Date written into the paper
    pub date: String,
}

impl PromptContext {
    /// Create a context for an author, dated today.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date: Local::now().format("%B %-d, %Y").to_string(),
            ..Default::default()
        }
    }

    /// Add a script.
    pub fn with_script(mut self, script: SourceDocument) -> Self {
        self.scripts.push(script);
        self
    }

    /// Add an instruction.
    pub fn with_instruction(mut self, instruction: SourceDocument) -> Self {
        self.instructions.push(instruction);
        self
    }

    /// Add a web source.
    pub fn with_web_source(mut self, source: WebSource) -> Self {
        self.web_sources.push(source);
        self
    }

    /// Add a search result.
    pub fn with_search_result(mut self, result: SearchResult) -> Self {
        self.search_results.push(result);
        self
    }

    /// Set the date string.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Check that a request can be made from this context.
    pub fn validate(&self) -> Result<()> {
        if self.instructions.is_empty() {
            return Err(Error::Prompt("at least one instruction is required".into()));
        }
        if self.scripts.is_empty() {
            return Err(Error::Prompt("at least one script is required".into()));
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(Error::Prompt("first and last name are required".into()));
        }
        Ok(())
    }

    /// Web sources followed by search results.
    fn internet(&self) -> String {
        let sources = format_web_sources(&self.web_sources);
        let results = format_search_results(&self.search_results);
        match (sources.is_empty(), results.is_empty()) {
            (_, true) => sources,
            (true, false) => results,
            (false, false) => format!("{}\n\n{}", sources, results),
        }
    }

    fn value(&self, placeholder: &str) -> Option<String> {
        let value = match placeholder {
            "scripts" => format_scripts(&self.scripts),
            "instructions" => format_instructions(&self.instructions),
            "internet" => self.internet(),
            "first_name" => self.first_name.clone(),
            "last_name" => self.last_name.clone(),
            "date" => self.date.clone(),
            _ => return None,
        };
        Some(value)
    }
}

/// A prompt template.
///
/// `{name}` is replaced by the matching [`PromptContext`] value, `{{` and
/// `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    /// Create a template. Surrounding whitespace is trimmed.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
        }
    }

    /// The template text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Fill in every placeholder.
    pub fn render(&self, ctx: &PromptContext) -> Result<String> {
        let mut output = String::with_capacity(self.text.len());
        let mut chars = self.text.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|(_, c)| *c == '{').is_some() => output.push('{'),
                '}' if chars.next_if(|(_, c)| *c == '}').is_some() => output.push('}'),
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(Error::Prompt(format!(
                            "unclosed placeholder at byte {}",
                            pos
                        )));
                    }
                    let value = ctx.value(name.trim()).ok_or_else(|| {
                        Error::Prompt(format!("unknown placeholder '{{{}}}'", name))
                    })?;
                    output.push_str(&value);
                }
                '}' => {
                    return Err(Error::Prompt(format!(
                        "single '}}' at byte {}, use '}}}}' for a literal brace",
                        pos
                    )));
                }
                c => output.push(c),
            }
        }

        Ok(output)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> PromptContext {
        PromptContext::new("Ada", "Lovelace")
            .with_date("May 1, 2024")
            .with_script(SourceDocument::new("notes.txt", "engine notes"))
            .with_instruction(SourceDocument::new("brief.txt", "write 2 pages"))
    }

    #[test]
    fn test_render_placeholders() {
        let template = PromptTemplate::new("  By {first_name} {last_name} on {date}\n");
        assert_eq!(
            template.render(&context()).unwrap(),
            "By Ada Lovelace on May 1, 2024"
        );
    }

    #[test]
    fn test_escaped_braces() {
        let template = PromptTemplate::new("{{literal}} {first_name}");
        assert_eq!(template.render(&context()).unwrap(), "{literal} Ada");
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = PromptTemplate::new("{title}").render(&context()).unwrap_err();
        assert!(matches!(err, Error::Prompt(_)));
        assert!(err.to_string().contains("{title}"));
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(PromptTemplate::new("{scripts").render(&context()).is_err());
        assert!(PromptTemplate::new("a } b").render(&context()).is_err());
    }

    #[test]
    fn test_internet_combines_sources_and_results() {
        let ctx = context()
            .with_web_source(WebSource {
                url: "u".into(),
                author: "a".into(),
                date: "d".into(),
                content: "c".into(),
            })
            .with_search_result(SearchResult::default());

        let internet = PromptTemplate::new("{internet}").render(&ctx).unwrap();
        assert!(internet.starts_with("Internet Source 1"));
        assert!(internet.contains("\n\nInternet Search Result 1"));
        assert_eq!(PromptTemplate::new("{internet}").render(&context()).unwrap(), "");
    }

    #[test]
    fn test_default_template_renders() {
        let prompt = PromptTemplate::default().render(&context()).unwrap();
        assert!(prompt.contains("Ada Lovelace"));
        assert!(prompt.contains("Script 1 (notes.txt):\nengine notes"));
        assert!(prompt.contains("####TITLE PAGE####"));
        assert!(prompt.contains(r####"Use "# ", "## " and "### " for headings."####));
        assert!(prompt.ends_with("Use **bold** and *italic* for emphasis."));
    }

    #[test]
    fn test_validate() {
        assert!(context().validate().is_ok());

        let no_scripts = PromptContext::new("Ada", "Lovelace")
            .with_instruction(SourceDocument::new("i", "x"));
        assert!(matches!(no_scripts.validate(), Err(Error::Prompt(_))));

        let no_name = PromptContext::new("", "Lovelace")
            .with_script(SourceDocument::new("s", "x"))
            .with_instruction(SourceDocument::new("i", "x"));
        assert!(no_name.validate().is_err());
    }
}
