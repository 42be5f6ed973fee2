//! Application-wide error types.
//!
//! Enrichment itself cannot fail: provider errors ([`EnrichmentError`]) are
//! absorbed inside the service. What can fail is everything around it -
//! reading and writing record files, configuration, building clients.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors (e.g., [`EnrichmentError`], [`ConfigError`]) for detailed handling
//! - CLI/main uses `anyhow` for convenient error propagation
//!
//! [`EnrichmentError`]: crate::enrichment::EnrichmentError
//! [`ConfigError`]: crate::config::ConfigError

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider client setup error
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] crate::enrichment::EnrichmentError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Input that parsed but isn't usable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File not found
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a not found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Json(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("/path/to/tracks.json");
        assert!(err.to_string().contains("/path/to/tracks.json"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::invalid_input("expected object").context("while reading tracks.json");
        let msg = err.to_string();
        assert!(msg.contains("while reading tracks.json"));
        assert!(msg.contains("expected object"));
    }

    #[test]
    fn test_json_result_ext() {
        let result: std::result::Result<serde_json::Value, _> = serde_json::from_str("{oops");
        let err = result.with_context("parsing input").unwrap_err();
        assert!(err.to_string().starts_with("parsing input: JSON error"));
    }

    #[test]
    fn test_enrichment_error_converts() {
        let err: Error = crate::enrichment::EnrichmentError::Client("no tls".to_string()).into();
        assert!(err.to_string().contains("no tls"));
    }
}
