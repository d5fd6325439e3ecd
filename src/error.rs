//! Error types for the extractor.
//!
//! The batch pipeline deliberately treats most per-document problems as
//! recorded skips rather than errors (see `extractor`); this enum covers
//! the failures that should actually stop a run.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = ExtractError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing input",
        ));
        assert!(err.to_string().contains("missing input"));
    }
}
