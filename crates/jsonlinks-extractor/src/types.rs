//! Value types shared by the extraction and report stages

use crate::config::WebScheme;
use std::fmt;
use url::Url;

/// Origin key of a web URL: `scheme://host` plus `:port` when the port is
/// not the scheme default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Root(String);

impl Root {
    /// Derive the root of `url` under the given web scheme.
    ///
    /// Returns `None` when the URL has no host, or when its scheme is not
    /// `scheme`.
    pub fn from_url(url: &Url, scheme: &WebScheme) -> Option<Self> {
        if !url.scheme().eq_ignore_ascii_case(&scheme.name) {
            return None;
        }
        let host = url.host_str().filter(|h| !h.is_empty())?;

        let mut root = format!("{}://{}", url.scheme(), host);
        if let Some(port) = url.port().filter(|p| *p != scheme.default_port) {
            root.push(':');
            root.push_str(&port.to_string());
        }
        Some(Self(root))
    }

    /// The root as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
