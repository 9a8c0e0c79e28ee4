//! Read a rendered README back into its listed entries.

use std::sync::LazyLock;

use eqvis_core::{Error, Result};
use regex::Regex;

use super::helpers::{extract_all_list_items, extract_section_content};
use super::parser::extract_first_heading;
use crate::render::RenderOptions;

static MEDIA_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*(.+?)\*\*: .*\(\[`([^`]+)`\]\((\S+)\)\)$").expect("Invalid media item regex")
});

static AUTHOR_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[!\[(.+?)\]\((\S+)\)\]\((\S+)\)$").expect("Invalid author item regex")
});

/// A media entry as listed in a README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedMedia {
    pub label: String,
    pub release_tag: String,
    pub release_url: String,
}

/// What a README lists, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeSummary {
    pub title: Option<String>,
    pub media: Vec<ListedMedia>,
    pub authors: Vec<String>,
}

impl ReadmeSummary {
    /// Summarize a README laid out like [`DocumentIndex::render_with`] output.
    ///
    /// Both sections must be present. List items that do not follow the
    /// rendered layout are skipped with a warning.
    ///
    /// [`DocumentIndex::render_with`]: crate::DocumentIndex::render_with
    pub fn from_markdown(content: &str, options: &RenderOptions) -> Result<Self> {
        for heading in [options.media_heading(), options.authors_heading()] {
            if extract_section_content(content, heading).is_none() {
                return Err(Error::parse(format!("README has no '## {heading}' section")));
            }
        }

        let title = extract_first_heading(content)
            .filter(|(level, _)| *level == pulldown_cmark::HeadingLevel::H1)
            .map(|(_, text)| text);

        let media = extract_all_list_items(content, options.media_heading())
            .iter()
            .filter_map(|item| match MEDIA_ITEM_RE.captures(item) {
                Some(caps) => Some(ListedMedia {
                    label: caps[1].to_string(),
                    release_tag: caps[2].to_string(),
                    release_url: caps[3].to_string(),
                }),
                None => {
                    log::warn!("Skipping unrecognized media item: {item}");
                    None
                }
            })
            .collect();

        let authors = extract_all_list_items(content, options.authors_heading())
            .iter()
            .filter_map(|item| match AUTHOR_ITEM_RE.captures(item) {
                Some(caps) => Some(caps[1].to_string()),
                None => {
                    log::warn!("Skipping unrecognized author item: {item}");
                    None
                }
            })
            .collect();

        Ok(Self {
            title,
            media,
            authors,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
