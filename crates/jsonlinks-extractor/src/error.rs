//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the analysis pipeline.
///
/// Every variant is terminal: nothing downstream of the failing stage runs.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Missing, empty or whitespace-only input path
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input path does not name an existing file
    #[error("File {} not found.", .0.display())]
    FileNotFound(PathBuf),

    /// Reading the file failed after the existence check passed
    #[error("Error reading file {}: {}", .path.display(), .source)]
    ReadError {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Input is not a well-formed JSON document
    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = ExtractorError::FileNotFound(PathBuf::from("missing.json"));
        assert_eq!(err.to_string(), "File missing.json not found.");
    }

    #[test]
    fn test_parse_error_keeps_position() {
        let source = serde_json::from_str::<serde_json::Value>("[1,]").unwrap_err();
        let err = ExtractorError::from(source);
        let message = err.to_string();
        assert!(message.starts_with("JSON parse error: "));
        assert!(message.contains("line 1"));
    }

    #[test]
    fn test_read_error_exposes_source() {
        use std::error::Error as _;

        let err = ExtractorError::ReadError {
            path: PathBuf::from("locked.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("locked.json"));
    }
}
