//! Error types for Paelles.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Paelles operations.
pub type Result<T> = std::result::Result<T, PaellaError>;

/// Errors that can occur in Paelles.
#[derive(Debug, Error)]
pub enum PaellaError {
    /// Pan diameter outside the supported set.
    #[error("Unsupported pan size: {value} (expected 70, 60 or 50)")]
    UnsupportedPanSize { value: String },

    /// Share link could not be parsed as a URL.
    #[error("Invalid share link: {link}")]
    InvalidLink {
        link: String,
        #[source]
        source: url::ParseError,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaellaError {
    /// Create an UnsupportedPanSize error.
    pub fn unsupported_pan_size(value: impl Into<String>) -> Self {
        Self::UnsupportedPanSize {
            value: value.into(),
        }
    }

    /// Create an InvalidLink error.
    pub fn invalid_link(link: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidLink {
            link: link.into(),
            source,
        }
    }
}
