//! jsonlinks Extractor
//!
//! Finds every absolute URL stored as a string anywhere in a JSON document
//! and summarizes them by origin.
//!
//! # Architecture
//!
//! ```text
//! file → Loader → text → Parser → JSON tree → Extractor → URLs → LinkReport
//! ```
//!
//! - **Loader**: validates the path and reads the file as UTF-8 text
//! - **Parser**: builds a `JsonNode` tree with no nesting limit; dropping
//!   a tree, complete or abandoned mid-parse, never recurses
//! - **Extractor**: walks the tree with an explicit stack, keeping string
//!   leaves that are absolute URLs in their entirety
//! - **LinkReport**: deduplicates, groups web URLs by root, sorts the rest
//!
//! # Example Usage
//!
//! ```
//! use jsonlinks_extractor::{analyze_text, ExtractorConfig};
//!
//! let text = r#"{"a": "https://example.com/p1", "b": ["ftp://files.example.org/f"]}"#;
//! let report = analyze_text(text, &ExtractorConfig::default()).unwrap();
//!
//! assert_eq!(report.total, 2);
//! assert_eq!(report.roots[0].as_str(), "https://example.com");
//! assert_eq!(report.non_web[0].as_str(), "ftp://files.example.org/f");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod loader;
mod parser;
mod pipeline;
mod report;
mod tree;
mod types;


pub use config::{ExtractorConfig, WebScheme};
pub use error::ExtractorError;
pub use extractor::{extract_urls, parse_absolute_url};
pub use loader::load_document;
pub use parser::parse_document;
pub use pipeline::{analyze_file, analyze_text};
pub use report::LinkReport;
pub use tree::JsonNode;
pub use types::Root;

/// Re-exported so callers can name the URL type without a direct dependency
pub use url::Url;
