//! End-to-end analysis: file → text → JSON tree → URLs → report

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::extractor::extract_urls;
use crate::loader::load_document;
use crate::parser::parse_document;
use crate::report::LinkReport;
use tracing::info;

/// Analyze the JSON document stored at `path`.
///
/// Stops at the first failing stage; no later stage runs after an error.
pub async fn analyze_file(path: &str, config: &ExtractorConfig) -> Result<LinkReport, ExtractorError> {
    config.validate().map_err(ExtractorError::Config)?;

    info!("Analyzing {}", path);
    let text = load_document(path, config).await?;
    analyze_text(&text, config)
}

/// Analyze JSON document text that is already in memory.
pub fn analyze_text(text: &str, config: &ExtractorConfig) -> Result<LinkReport, ExtractorError> {
    let tree = parse_document(text)?;
    let urls = extract_urls(tree);
    Ok(LinkReport::from_urls(urls, config))
}
