//! Construction-time checks for text and URL fields.
//!
//! Every check takes the field path (e.g. `"media[0].release_url"`) so that a
//! rejected value can be traced back to the manifest entry that produced it.

use url::Url;

use crate::{Error, Result};

/// Require a non-empty value (after trimming).
///
/// Line breaks are allowed; use [`require_single_line`] for labels and names.
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation_field(field, "must not be empty"));
    }
    Ok(())
}

/// Require a non-empty value without line breaks.
///
/// # Examples
///
/// ```
/// use eqvis_core::util::text::require_single_line;
///
/// assert!(require_single_line("project.name", "eqmarl-vis").is_ok());
/// assert!(require_single_line("project.name", "eqmarl\nvis").is_err());
/// assert!(require_single_line("project.name", "   ").is_err());
/// ```
pub fn require_single_line(field: &str, value: &str) -> Result<()> {
    require_text(field, value)?;
    if value.contains(['\n', '\r']) {
        return Err(Error::validation_field(
            field,
            "must be a single line of text",
        ));
    }
    Ok(())
}

/// Characters that end or alter a markdown link destination.
const LINK_DELIMITERS: [char; 5] = ['<', '>', '(', ')', '\\'];

/// Require a non-empty single line usable as link or image text.
///
/// Brackets are rejected since they would close the `[...]` early.
///
/// # Examples
///
/// ```
/// use eqvis_core::util::text::require_link_text;
///
/// assert!(require_link_text("authors.display_name", "zanderman").is_ok());
/// assert!(require_link_text("authors.display_name", "zander]man").is_err());
/// ```
pub fn require_link_text(field: &str, value: &str) -> Result<()> {
    require_single_line(field, value)?;
    if value.contains(['[', ']']) {
        return Err(Error::validation_field(
            field,
            format!("'{value}' must not contain '[' or ']'"),
        ));
    }
    Ok(())
}

/// Require non-empty text in which no line is a markdown heading.
///
/// Lines starting with `#` followed by whitespace (or nothing) are headings.
pub fn require_paragraph(field: &str, value: &str) -> Result<()> {
    require_text(field, value)?;
    if let Some(line) = value.lines().find(|line| is_heading_line(line)) {
        return Err(Error::validation_field(
            field,
            format!("line '{}' would render as a heading", line.trim()),
        ));
    }
    Ok(())
}

fn is_heading_line(line: &str) -> bool {
    let line = line.trim_start();
    let rest = line.trim_start_matches('#');
    rest.len() < line.len() && rest.chars().next().is_none_or(char::is_whitespace)
}

/// Require a syntactically valid absolute URL.
///
/// Only syntax is checked; the URL is never resolved. Whitespace is rejected
/// outright because it would be silently stripped by the parser and the value
/// is rendered verbatim. So are `<`, `>`, `(`, `)` and `\`, which would end or
/// rewrite the link destination once rendered.
///
/// # Examples
///
/// ```
/// use eqvis_core::util::text::require_url;
///
/// assert!(require_url("license.license_url", "https://creativecommons.org/licenses/by/4.0/").is_ok());
/// assert!(require_url("license.license_url", "creativecommons.org").is_err());
/// ```
pub fn require_url(field: &str, value: &str) -> Result<()> {
    require_text(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(Error::validation_field(field, "URL must not contain whitespace"));
    }
    if let Some(c) = value.chars().find(|c| LINK_DELIMITERS.contains(c)) {
        return Err(Error::validation_field(
            field,
            format!("URL '{value}' must not contain '{c}'"),
        ));
    }
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| Error::validation_field(field, format!("invalid URL '{value}': {e}")))
}

// ============================================================================
// Tests
// ============================================================================
