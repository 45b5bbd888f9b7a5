//! Error handling for the WaveView application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for WaveView operations
#[derive(Error, Debug)]
pub enum WaveViewError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from CSV decoding
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors while decompressing gzip/zlib input
    #[error("Decompression error: {0}")]
    Decompress(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors while encoding or writing chart snapshots
    #[error("Image error: {0}")]
    Image(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<WaveViewError>,
    },
}

impl WaveViewError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        WaveViewError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<image::ImageError> for WaveViewError {
    fn from(err: image::ImageError) -> Self {
        WaveViewError::Image(err.to_string())
    }
}

/// Result type alias for WaveView operations
pub type Result<T> = std::result::Result<T, WaveViewError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WaveViewError::Decompress("truncated gzip stream".to_string());
        assert_eq!(
            err.to_string(),
            "Decompression error: truncated gzip stream"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = WaveViewError::Config("missing data dir".to_string());
        let with_ctx = err.with_context("Failed to load app state");
        assert!(with_ctx.to_string().contains("Failed to load app state"));
    }

    #[test]
    fn test_result_context() {
        let res: Result<()> = Err(WaveViewError::Decompress("bad stream".to_string()));
        let err = res.context("loader request").unwrap_err();
        assert!(err.to_string().starts_with("loader request"));
    }
}
