//! Markdown rendering of a document index.
//!
//! The document is a sequence of blocks separated by one blank line, ending
//! with a single newline:
//!
//! ```markdown
//! # eqmarl-vis
//!
//! [![License: CC-BY-4.0](badge)](license)
//!
//! Project description.
//!
//! Related code repository: <https://...>
//!
//! ## Media
//!
//! - **ICAB Demo**: Conference demo. ([`icab-demo`](https://...))
//!
//! ## Authors
//!
//! - [![zanderman](badge)](profile)
//! ```

use eqvis_core::{Error, Result, require_single_line};

use crate::index::DocumentIndex;
use crate::model::{AuthorEntry, MediaEntry};

/// Default heading of the media section.
pub const DEFAULT_MEDIA_HEADING: &str = "Media";

/// Default heading of the authors section.
pub const DEFAULT_AUTHORS_HEADING: &str = "Authors";

/// Section headings used when rendering.
///
/// Headings are validated on construction so that a rendered README can
/// always be read back: each is a trimmed single line, and the two differ
/// even when compared case-insensitively.
///
/// # Example
///
/// ```rust
/// use eqvis_index::RenderOptions;
///
/// let options = RenderOptions::new("Videos", "Team")?;
/// assert_eq!(options.media_heading(), "Videos");
/// assert!(RenderOptions::new("Media", "media").is_err());
/// # Ok::<(), eqvis_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    media_heading: String,
    authors_heading: String,
}

impl RenderOptions {
    pub fn new(
        media_heading: impl Into<String>,
        authors_heading: impl Into<String>,
    ) -> Result<Self> {
        let options = Self {
            media_heading: media_heading.into(),
            authors_heading: authors_heading.into(),
        };
        require_heading("render.media_heading", &options.media_heading)?;
        require_heading("render.authors_heading", &options.authors_heading)?;
        if options.media_heading.to_lowercase() == options.authors_heading.to_lowercase() {
            return Err(Error::validation_field(
                "render.authors_heading",
                format!(
                    "'{}' is already used as the media heading",
                    options.authors_heading
                ),
            ));
        }
        Ok(options)
    }

    pub fn media_heading(&self) -> &str {
        &self.media_heading
    }

    pub fn authors_heading(&self) -> &str {
        &self.authors_heading
    }
}

/// Trimmed single line without a trailing `#` sequence, which markdown
/// would treat as a closing marker.
fn require_heading(field: &str, heading: &str) -> Result<()> {
    require_single_line(field, heading)?;
    if heading != heading.trim() {
        return Err(Error::validation_field(
            field,
            format!("'{heading}' has leading or trailing whitespace"),
        ));
    }
    if heading.trim_end_matches('#').ends_with(char::is_whitespace) {
        return Err(Error::validation_field(
            field,
            format!("'{heading}' must not end with a closing '#' sequence"),
        ));
    }
    Ok(())
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            media_heading: DEFAULT_MEDIA_HEADING.to_string(),
            authors_heading: DEFAULT_AUTHORS_HEADING.to_string(),
        }
    }
}

pub(crate) fn render_document(index: &DocumentIndex, options: &RenderOptions) -> String {
    let project = index.project();
    let license = project.license();

    let mut blocks = vec![
        format!("# {}", project.name()),
        format!(
            "[![License: {}]({})]({})",
            license.name(),
            license.badge_url(),
            license.license_url()
        ),
        project.description().to_string(),
        format!("Related code repository: <{}>", project.related_project()),
    ];

    if let Some(paper) = project.paper() {
        blocks.push(format!("Paper: [{}]({})", paper.title(), paper.url()));
    }

    blocks.push(render_section(
        &options.media_heading,
        index.media().iter().map(media_item),
    ));
    blocks.push(render_section(
        &options.authors_heading,
        index.authors().iter().map(author_item),
    ));

    let mut document = blocks.join("\n\n");
    document.push('\n');
    document
}

/// Heading followed by one list item per line; no items leaves the heading alone.
fn render_section(heading: &str, items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items.collect();
    if items.is_empty() {
        format!("## {heading}")
    } else {
        format!("## {heading}\n\n{}", items.join("\n"))
    }
}

fn media_item(entry: &MediaEntry) -> String {
    format!(
        "- **{}**: {} ([`{}`]({}))",
        entry.label(),
        entry.description(),
        entry.release_tag(),
        entry.release_url()
    )
}

fn author_item(author: &AuthorEntry) -> String {
    format!(
        "- [![{}]({})]({})",
        author.display_name(),
        author.badge_image_url(),
        author.profile_url()
    )
}

// ============================================================================
// Tests
// ============================================================================
