//! Configuration for the Extractor

use serde::Deserialize;

/// A scheme that counts as "web" together with its conventional port.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebScheme {
    /// Lowercase scheme name, e.g. `https`
    pub name: String,

    /// Port omitted from roots when the URL uses it
    pub default_port: u16,
}

impl WebScheme {
    fn new(name: &str, default_port: u16) -> Self {
        Self {
            name: name.to_string(),
            default_port,
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// Schemes grouped by root; every other scheme is reported as non-web
    #[serde(default = "default_web_schemes")]
    pub web_schemes: Vec<WebScheme>,

    /// Drop a leading UTF-8 byte-order mark before parsing
    #[serde(default = "default_true")]
    pub strip_bom: bool,
}

impl ExtractorConfig {
    /// Look up a web scheme, ignoring ASCII case
    pub fn web_scheme(&self, scheme: &str) -> Option<&WebScheme> {
        self.web_schemes
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(scheme))
    }

    /// Whether URLs with this scheme are grouped by root
    pub fn is_web_scheme(&self, scheme: &str) -> bool {
        self.web_scheme(scheme).is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.web_schemes.is_empty() {
            return Err("web_schemes must not be empty".to_string());
        }
        for scheme in &self.web_schemes {
            let valid_name = scheme
                .name
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_lowercase())
                && scheme
                    .name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "+-.".contains(c));
            if !valid_name {
                return Err(format!("'{}' is not a lowercase URL scheme", scheme.name));
            }
            if scheme.default_port == 0 {
                return Err(format!("default_port for '{}' must be greater than 0", scheme.name));
            }
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// `http` on 80 and `https` on 443
    fn default() -> Self {
        Self {
            web_schemes: default_web_schemes(),
            strip_bom: true,
        }
    }
}

fn default_web_schemes() -> Vec<WebScheme> {
    vec![WebScheme::new("http", 80), WebScheme::new("https", 443)]
}

fn default_true() -> bool {
    true
}
