//! `[feed]` configuration.

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSectionConfig {
    /// Output file name, relative to the build output directory.
    pub filename: PathBuf,

    /// Maximum number of items. Kept as a raw TOML value so that a string
    /// or negative number is reported as a config error instead of a parse
    /// failure with no field name.
    pub num_items: Option<toml::Value>,

    /// Pages whose name matches at the start are left out of the feed.
    pub skip_regex: String,

    /// Feed format (RSS 2.0 or Atom 1.0).
    pub format: FeedFormat,

    /// Metadata key holding an explicit publish date.
    pub date_field: String,

    /// Number of characters kept in each item description.
    pub summary_length: usize,
}

impl Default for FeedSectionConfig {
    fn default() -> Self {
        Self {
            filename: "rss.xml".into(),
            num_items: None,
            skip_regex: String::new(),
            format: FeedFormat::Rss,
            date_field: "Publish Date".into(),
            summary_length: 200,
        }
    }
}

impl FeedSectionConfig {
    pub const FILENAME: FieldPath = FieldPath::new("feed.filename");
    pub const NUM_ITEMS: FieldPath = FieldPath::new("feed.num_items");
    pub const SKIP_REGEX: FieldPath = FieldPath::new("feed.skip_regex");
    pub const DATE_FIELD: FieldPath = FieldPath::new("feed.date_field");

    /// Item limit; `None` means unlimited.
    ///
    /// Accepts a non-negative integer, a numeric string, or an empty string.
    /// Zero is treated as unlimited.
    pub fn max_items(&self) -> Result<Option<usize>, ConfigError> {
        let limit = match &self.num_items {
            None => return Ok(None),
            Some(toml::Value::String(s)) if s.trim().is_empty() => return Ok(None),
            Some(toml::Value::String(s)) => s.trim().parse::<i64>().map_err(|_| {
                ConfigError::invalid(
                    Self::NUM_ITEMS,
                    format!("expected a number of items, got \"{s}\""),
                )
            })?,
            Some(toml::Value::Integer(n)) => *n,
            Some(other) => {
                return Err(ConfigError::invalid(
                    Self::NUM_ITEMS,
                    format!("expected a number of items, got {} `{other}`", other.type_str()),
                ));
            }
        };

        match usize::try_from(limit) {
            Ok(0) => Ok(None),
            Ok(n) => Ok(Some(n)),
            Err(_) => Err(ConfigError::invalid(
                Self::NUM_ITEMS,
                format!("must not be negative, got {limit}"),
            )),
        }
    }

    /// Compile the skip pattern, anchored at the start of the page name.
    ///
    /// `None` when no pattern is configured.
    pub fn skip_pattern(&self) -> Result<Option<Regex>, ConfigError> {
        if self.skip_regex.is_empty() {
            return Ok(None);
        }
        Regex::new(&format!("^(?:{})", self.skip_regex))
            .map(Some)
            .map_err(|e| ConfigError::invalid(Self::SKIP_REGEX, format!("invalid pattern: {e}")))
    }

    /// Output file name must stay inside the output directory.
    fn validate_filename(&self, diag: &mut ConfigDiagnostics) {
        let path: &Path = &self.filename;
        if path.as_os_str().is_empty() {
            diag.error(Self::FILENAME, "must not be empty");
        } else if path.is_absolute()
            || path
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir))
        {
            diag.error_with_hint(
                Self::FILENAME,
                format!("`{}` escapes the output directory", path.display()),
                "use a relative name like \"rss.xml\"",
            );
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_filename(diag);
        diag.check(self.max_items());
        diag.check(self.skip_pattern());
        if self.date_field.trim().is_empty() {
            diag.error(Self::DATE_FIELD, "must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.feed.filename, PathBuf::from("rss.xml"));
        assert_eq!(config.feed.format, FeedFormat::Rss);
        assert_eq!(config.feed.date_field, "Publish Date");
        assert_eq!(config.feed.summary_length, 200);
        assert_eq!(config.feed.max_items().unwrap(), None);
        assert!(config.feed.skip_pattern().unwrap().is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[feed]\nfilename = \"feed.xml\"\nformat = \"atom\"\nnum_items = 5\nskip_regex = \"draft/\"",
        );
        assert_eq!(config.feed.filename, PathBuf::from("feed.xml"));
        assert_eq!(config.feed.format, FeedFormat::Atom);
        assert_eq!(config.feed.max_items().unwrap(), Some(5));
    }

    #[test]
    fn test_max_items_accepted_forms() {
        for (raw, expected) in [
            ("0", None),
            ("\"\"", None),
            ("\"12\"", Some(12)),
            ("3", Some(3)),
        ] {
            let config = test_parse_config(&format!("[feed]\nnum_items = {raw}"));
            assert_eq!(config.feed.max_items().unwrap(), expected, "num_items = {raw}");
        }
    }

    #[test]
    fn test_max_items_rejected_forms() {
        for raw in ["-1", "\"ten\"", "2.5", "true"] {
            let config = test_parse_config(&format!("[feed]\nnum_items = {raw}"));
            let err = config.feed.max_items().unwrap_err();
            assert!(
                err.to_string().contains("feed.num_items"),
                "num_items = {raw}: {err}"
            );
        }
    }

    #[test]
    fn test_skip_pattern_matches_at_start_only() {
        let config = test_parse_config("[feed]\nskip_regex = \"draft/\"");
        let re = config.feed.skip_pattern().unwrap().unwrap();
        assert!(re.is_match("draft/intro"));
        assert!(!re.is_match("posts/draft/intro"));
    }

    #[test]
    fn test_skip_pattern_alternation_stays_anchored() {
        let config = test_parse_config("[feed]\nskip_regex = \"genindex|search\"");
        let re = config.feed.skip_pattern().unwrap().unwrap();
        assert!(re.is_match("search"));
        assert!(re.is_match("genindex"));
        assert!(!re.is_match("api/search"));
    }

    #[test]
    fn test_invalid_skip_pattern() {
        let config = test_parse_config("[feed]\nskip_regex = \"(unclosed\"");
        let err = config.feed.skip_pattern().unwrap_err();
        assert!(err.to_string().contains("feed.skip_regex"));
    }

    #[test]
    fn test_validate_filename() {
        for bad in ["\"\"", "\"../rss.xml\"", "\"/tmp/rss.xml\""] {
            let config = test_parse_config(&format!("[feed]\nfilename = {bad}"));
            let mut diag = ConfigDiagnostics::new();
            config.feed.validate(&mut diag);
            assert_eq!(diag.len(), 1, "filename = {bad}");
            assert_eq!(diag.errors()[0].field, FeedSectionConfig::FILENAME);
        }
    }
}
