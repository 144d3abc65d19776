//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("[{field}] {message}")]
    Invalid { field: &'static str, message: String },

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl ConfigError {
    pub fn invalid(field: FieldPath, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.as_str(),
            message: message.into(),
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "feed.skip_regex")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// One line: `` `feed.num_items` must not be negative (hint: ...) ``
impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            let hint = format!("(hint: {hint})");
            write!(f, " {}", hint.if_supports_color(Stream::Stdout, |h| h.dimmed()))?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors collected across all sections, reported in one go.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Record the error of a fallible check, if any.
    pub fn check<T>(&mut self, result: Result<T, ConfigError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(ConfigError::Invalid { field, message }) => {
                self.error(FieldPath::new(field), message);
                None
            }
            Err(other) => {
                self.errors.push(ConfigDiagnostic::new(
                    FieldPath::new("config"),
                    other.to_string(),
                ));
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let header = format!(
            "invalid configuration ({count} {})",
            if count == 1 { "error" } else { "errors" }
        );
        write!(f, "{}", header.if_supports_color(Stream::Stdout, |h| h.red()))?;
        for err in &self.errors {
            write!(f, "\n  - {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("pagefeed.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("pagefeed.toml"));

        let invalid = ConfigError::invalid(FieldPath::new("feed.num_items"), "must be >= 0");
        assert_eq!(invalid.to_string(), "[feed.num_items] must be >= 0");
    }

    #[test]
    fn test_check_collects_invalid() {
        let mut diag = ConfigDiagnostics::new();
        let ok: Option<u8> = diag.check(Ok(3));
        assert_eq!(ok, Some(3));
        assert!(diag.is_empty());

        let bad: Option<u8> = diag.check(Err(ConfigError::invalid(
            FieldPath::new("feed.skip_regex"),
            "unclosed group",
        )));
        assert_eq!(bad, None);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "feed.skip_regex");
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_diagnostics_display_lists_every_field() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("feed.num_items"), "must not be negative");
        diag.error_with_hint(FieldPath::new("site.url"), "is not set", "use https://example.com");

        // Color codes may wrap each part; the text itself stays contiguous.
        let text = diag.to_string();
        assert!(text.contains("invalid configuration (2 errors)"));
        assert!(text.contains("feed.num_items"));
        assert!(text.contains("must not be negative"));
        assert!(text.contains("(hint: use https://example.com)"));
        assert_eq!(text.matches("\n  - ").count(), 2);
    }
}
