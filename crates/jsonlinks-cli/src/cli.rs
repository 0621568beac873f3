//! CLI argument parsing.

use clap::Parser;

/// jsonlinks - List the absolute URLs stored anywhere in a JSON document.
///
/// Prints the total and unique URL counts, the distinct web roots
/// (scheme://host[:port]) and the non-HTTP URLs in sorted order.
#[derive(Debug, Parser)]
#[command(name = "jsonlinks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON file to scan
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_file() {
        let cli = Cli::try_parse_from(["jsonlinks", "data.json"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some("data.json"));
    }

    #[test]
    fn test_missing_file_is_left_to_validation() {
        let cli = Cli::try_parse_from(["jsonlinks"]).unwrap();
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["jsonlinks", "--format", "json", "data.json"]).is_err());
    }

    #[test]
    fn test_second_positional_rejected() {
        assert!(Cli::try_parse_from(["jsonlinks", "a.json", "b.json"]).is_err());
    }
}
