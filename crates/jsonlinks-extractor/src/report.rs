//! Deduplicate extracted URLs and summarize them by root

use crate::config::ExtractorConfig;
use crate::types::Root;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use tracing::info;
use url::Url;

/// Summary of the URLs found in one document.
///
/// Rendered through `Display` as:
///
/// ```text
/// Found total {total} links.
///
/// Unique links: {unique}
/// Unique by root: {roots}
/// {root}...
///
/// Non-HTTP URLs: {non_web}
/// {url}...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
    /// Number of extracted URLs, duplicates included
    pub total: usize,

    /// Distinct URLs in first-seen order
    pub unique: Vec<Url>,

    /// Number of distinct URLs with a web scheme
    pub web_count: usize,

    /// Distinct roots of the web URLs, ascending
    pub roots: Vec<Root>,

    /// Distinct non-web URLs, ascending by their string form
    pub non_web: Vec<Url>,
}

impl LinkReport {
    /// Build the report from the raw extraction output.
    pub fn from_urls(urls: Vec<Url>, config: &ExtractorConfig) -> Self {
        let total = urls.len();

        let mut seen = HashSet::with_capacity(urls.len());
        let unique: Vec<Url> = urls
            .into_iter()
            .filter(|url| seen.insert(url.clone()))
            .collect();

        let mut web_count = 0;
        let mut roots = BTreeSet::new();
        let mut non_web = Vec::new();
        for url in &unique {
            match config.web_scheme(url.scheme()) {
                Some(scheme) => {
                    web_count += 1;
                    if let Some(root) = Root::from_url(url, scheme) {
                        roots.insert(root);
                    }
                }
                None => non_web.push(url.clone()),
            }
        }
        non_web.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        info!(
            "Report: {} total, {} unique, {} web, {} roots, {} non-web",
            total,
            unique.len(),
            web_count,
            roots.len(),
            non_web.len()
        );

        Self {
            total,
            unique,
            web_count,
            roots: roots.into_iter().collect(),
            non_web,
        }
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found total {} links.", self.total)?;
        writeln!(f)?;
        writeln!(f, "Unique links: {}", self.unique.len())?;
        writeln!(f, "Unique by root: {}", self.roots.len())?;
        for root in &self.roots {
            writeln!(f, "{}", root)?;
        }
        writeln!(f)?;
        writeln!(f, "Non-HTTP URLs: {}", self.non_web.len())?;
        for url in &self.non_web {
            writeln!(f, "{}", url)?;
        }
        Ok(())
    }
}
