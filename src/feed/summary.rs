//! Item description extraction.
//!
//! Turns a rendered page body into a short plain-text teaser:
//!
//! 1. drop everything up to the first `</h1>` (the page title)
//! 2. drop every `<p>By ...</p>` byline
//! 3. replace tags, newlines and `¶` permalink glyphs with spaces
//! 4. keep `limit` characters and append `...`

use crate::error::PageError;
use regex::Regex;
use std::sync::LazyLock;

/// Appended to every description, truncated or not.
pub const TRUNCATION_MARKER: &str = "...";

/// Default description length in characters.
pub const DEFAULT_SUMMARY_LENGTH: usize = 200;

const HEADING_END: &str = "</h1>";

static RE_BYLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p>By .*?</p>").unwrap());

/// A tag never spans a line break.
static RE_MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>\n]*>|\n|¶").unwrap());

/// Build the description for a page body.
///
/// Fails when the body has no top-level heading: without it there is no
/// reliable place where the content starts.
pub fn sanitize(body: &str, limit: usize) -> Result<String, PageError> {
    let start = body.find(HEADING_END).ok_or(PageError::MissingHeading)? + HEADING_END.len();
    let content = &body[start..];

    let content = RE_BYLINE.replace_all(content, "");
    let text = RE_MARKUP.replace_all(&content, " ");

    let mut out: String = text.chars().take(limit).collect();
    out.push_str(TRUNCATION_MARKER);
    Ok(out)
}
