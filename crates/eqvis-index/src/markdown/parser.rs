//! Markdown structure parsing built on `pulldown-cmark`.
//!
//! - Extract the first heading (any level)
//! - Collect link and image targets in document order
//!
//! # Example
//!
//! ```rust
//! use eqvis_index::markdown::parser::{extract_first_heading, extract_link_targets};
//! use pulldown_cmark::HeadingLevel;
//!
//! let content = "# eqmarl-vis\n\nSee <https://github.com/news-vt/eqmarl>.\n";
//!
//! let (level, title) = extract_first_heading(content).unwrap();
//! assert_eq!(level, HeadingLevel::H1);
//! assert_eq!(title, "eqmarl-vis");
//!
//! let links = extract_link_targets(content);
//! assert_eq!(links[0].url, "https://github.com/news-vt/eqmarl");
//! ```

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Whether a target was referenced as a link or an embedded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Link,
    Image,
}

/// One link or image destination found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub kind: LinkKind,
    pub url: String,
}

/// Extract the first heading from markdown content.
///
/// Returns the heading level and text content. Inline formatting (bold,
/// code, links) is stripped from the heading text.
pub fn extract_first_heading(content: &str) -> Option<(HeadingLevel, String)> {
    let mut in_heading = false;
    let mut heading_level = HeadingLevel::H1;
    let mut heading_text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = true;
                heading_level = level;
                heading_text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                if in_heading && !heading_text.trim().is_empty() {
                    return Some((heading_level, heading_text.trim().to_string()));
                }
                in_heading = false;
            }
            Event::Text(text) | Event::Code(text) if in_heading => {
                heading_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_heading => {
                heading_text.push(' ');
            }
            _ => {}
        }
    }

    None
}

/// Collect every link and image destination, in document order.
///
/// Autolinks (`<https://...>`) count as links. Nested targets, such as a
/// badge image wrapped in a link, are reported outer link first.
pub fn extract_link_targets(content: &str) -> Vec<LinkTarget> {
    Parser::new(content)
        .filter_map(|event| match event {
            Event::Start(Tag::Link { dest_url, .. }) => Some(LinkTarget {
                kind: LinkKind::Link,
                url: dest_url.to_string(),
            }),
            Event::Start(Tag::Image { dest_url, .. }) => Some(LinkTarget {
                kind: LinkKind::Image,
                url: dest_url.to_string(),
            }),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
