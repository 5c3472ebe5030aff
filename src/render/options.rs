//! Rendering options.

use chrono::{DateTime, Utc};

/// Options for rendering a draft into a [`Document`](crate::model::Document).
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Attach a centered page-number footer
    pub page_numbers: bool,

    /// Author recorded in the document metadata
    pub author: Option<String>,

    /// Creation date recorded in the document metadata
    pub created: Option<DateTime<Utc>>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the page-number footer.
    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.page_numbers = enabled;
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the creation date.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Stamp the document with the current time.
    pub fn created_now(self) -> Self {
        self.with_created(Utc::now())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_numbers: true,
            author: None,
            created: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert!(options.page_numbers);
        assert!(options.author.is_none());
        assert!(options.created.is_none());
    }

    #[test]
    fn test_builder() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let options = RenderOptions::new()
            .with_page_numbers(false)
            .with_author("Jane Roe")
            .with_created(date);

        assert!(!options.page_numbers);
        assert_eq!(options.author.as_deref(), Some("Jane Roe"));
        assert_eq!(options.created, Some(date));
    }
}
