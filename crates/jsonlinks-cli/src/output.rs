//! Output formatting for the CLI.

use colored::*;
use jsonlinks_extractor::LinkReport;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Render the report for stdout.
    ///
    /// Never colored: the layout is fixed so it can be compared byte for byte.
    pub fn report(&self, report: &LinkReport) -> String {
        report.to_string()
    }

    /// Format a fatal error as a single line.
    pub fn error(&self, message: &str) -> String {
        let message = message.lines().next().unwrap_or_default();
        format!("{} {}", self.red("Error:"), message)
    }

    /// Bold red if color is enabled.
    fn red(&self, text: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.red().bold().to_string()
    }
}
