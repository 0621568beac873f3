//! jsonlinks CLI library.
//!
//! Wires the extractor pipeline to the command line: argument parsing,
//! logging setup, report output and error reporting.

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use output::Formatter;

use jsonlinks_extractor::{analyze_file, ExtractorConfig};
use std::io::Write;
use tracing::info;

/// Analyze the file named on the command line and write the report to `out`.
///
/// Nothing is written to `out` unless the whole analysis succeeds.
pub async fn run<W: Write>(cli: Cli, formatter: &Formatter, out: &mut W) -> Result<()> {
    let path = cli.file.unwrap_or_default();
    let config = ExtractorConfig::default();

    let report = analyze_file(&path, &config).await?;
    info!("Report ready: {} URLs", report.total);

    out.write_all(formatter.report(&report).as_bytes())?;
    out.flush()?;
    Ok(())
}
