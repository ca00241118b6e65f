//! Error types for pdfoutline library.

use thiserror::Error;

/// Result type alias for pdfoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// A fragment carries a value the classifier cannot score.
    #[error("Malformed fragment on page {page}: {reason}")]
    MalformedFragment {
        /// Page the fragment belongs to
        page: u32,
        /// What is wrong with it
        reason: String,
    },

    /// The language identifier could not classify the sample.
    #[error("Language detection error: {0}")]
    LanguageDetection(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Create a malformed fragment error.
    pub fn malformed(page: u32, reason: impl Into<String>) -> Self {
        Error::MalformedFragment {
            page,
            reason: reason.into(),
        }
    }
}
