//! Error types for papersmith library.

use std::io;
use thiserror::Error;

/// Result type alias for papersmith operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring, rendering or exporting.
///
/// Problems inside the rendered content (ragged tables, unterminated title
/// pages) are never raised; they are reported as
/// [`RenderWarning`](crate::render::RenderWarning)s instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The formatting configuration is invalid.
    #[error("Invalid formatting configuration: {0}")]
    Config(String),

    /// There is no text to render.
    #[error("Nothing to render: input is empty")]
    EmptyInput,

    /// Error while serializing a rendered document (DOCX, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// The prompt template or its inputs are invalid.
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// The text generator failed to produce a draft.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
