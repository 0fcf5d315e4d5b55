//! Error types for stylesheet loading.
//!
//! Resolution itself never fails: missing selectors, classes, styles and
//! handlers all degrade to empty defaults. Only turning external text or files
//! into a [`StyleSheet`](crate::sheet::StyleSheet) can produce an [`Error`].

use std::path::PathBuf;

/// Result type alias for stylesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stylesheet text is not valid JSON.
    #[error("JSON stylesheet error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stylesheet text is not valid TOML.
    #[error("TOML stylesheet error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The stylesheet root is not a table of selectors.
    #[error("Stylesheet root must be a table of selectors, found {found}")]
    NotATable { found: &'static str },

    /// The file extension does not name a known stylesheet format.
    #[error("Unsupported stylesheet format for '{path}' (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// A rule was added under text that is not a selector.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported-format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}
