//! Read the input document from disk

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

const BOM: char = '\u{feff}';

/// Load the file at `path` as UTF-8 text.
///
/// The path must be non-blank and name an existing regular file. The handle
/// opened by `tokio::fs` is closed before this returns, on success and on
/// failure alike.
pub async fn load_document(path: &str, config: &ExtractorConfig) -> Result<String, ExtractorError> {
    if path.trim().is_empty() {
        return Err(ExtractorError::InvalidArgument(
            "Please provide a source file name as a first argument.".to_string(),
        ));
    }
    let path = PathBuf::from(path);

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(ExtractorError::FileNotFound(path)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ExtractorError::FileNotFound(path));
        }
        Err(source) => return Err(ExtractorError::ReadError { path, source }),
    }

    let mut text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            // Removed between the metadata check and the read
            return Err(ExtractorError::FileNotFound(path));
        }
        Err(source) => return Err(ExtractorError::ReadError { path, source }),
    };

    if config.strip_bom && text.starts_with(BOM) {
        text.replace_range(..BOM.len_utf8(), "");
    }

    info!("Loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}
