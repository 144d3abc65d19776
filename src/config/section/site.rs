//! `[site]` configuration.
//!
//! Channel-level metadata copied into the feed container at build start.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Feed title, usually the project name.
    pub title: String,

    /// Base URL every item link is built from (e.g. "https://docs.example.com").
    pub url: Option<String>,

    /// Feed author.
    pub author: String,

    /// Feed description.
    pub description: String,

    /// Language code (e.g. "en"); omitted from the feed when empty.
    pub language: String,

    /// Copyright notice; omitted from the feed when empty.
    pub copyright: String,
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Base URL without a trailing slash, empty when unset.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    pub fn language(&self) -> Option<&str> {
        Some(self.language.as_str()).filter(|s| !s.is_empty())
    }

    pub fn copyright(&self) -> Option<&str> {
        Some(self.copyright.as_str()).filter(|s| !s.is_empty())
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be set: item links are absolute
    /// - `url` must be http(s) with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            diag.error_with_hint(
                Self::URL,
                "base URL is not configured, feed links must be absolute",
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(url: Option<&str>) -> SiteInfoConfig {
        SiteInfoConfig {
            url: url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        assert_eq!(site(Some("https://example.com/docs/")).base_url(), "https://example.com/docs");
        assert_eq!(site(None).base_url(), "");
    }

    #[test]
    fn test_optional_fields() {
        let mut info = site(None);
        assert_eq!(info.language(), None);
        assert_eq!(info.copyright(), None);
        info.language = "en".into();
        info.copyright = "2024, Example".into();
        assert_eq!(info.language(), Some("en"));
        assert_eq!(info.copyright(), Some("2024, Example"));
    }

    #[test]
    fn test_validate_url() {
        let mut diag = ConfigDiagnostics::new();
        site(Some("https://example.com")).validate(&mut diag);
        assert!(diag.is_empty());

        for bad in [None, Some("ftp://example.com"), Some("not a url")] {
            let mut diag = ConfigDiagnostics::new();
            site(bad).validate(&mut diag);
            assert_eq!(diag.len(), 1, "{bad:?}");
            assert_eq!(diag.errors()[0].field, SiteInfoConfig::URL);
        }
    }
}
