//! Line-oriented helpers for extracting sections and list items.

use std::sync::LazyLock;

use regex::Regex;

static SECTION_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{2,6})\s+(.+?)(?:\s+#+)?\s*$").expect("Invalid section heading regex")
});

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.+)$").expect("Invalid list item regex"));

/// Extract all content under a section heading until the next heading of the
/// same or a higher level.
///
/// Heading comparison is case-insensitive and ignores surrounding whitespace.
/// Returns `None` if the heading is not present; a present but empty section
/// yields `Some` with only whitespace.
///
/// # Example
///
/// ```rust
/// use eqvis_index::markdown::helpers::extract_section_content;
///
/// let content = "## Media\n\n- demo\n\n## Authors\n\n- someone\n";
///
/// let media = extract_section_content(content, "Media").unwrap();
/// assert!(media.contains("- demo"));
/// assert!(!media.contains("someone"));
/// ```
pub fn extract_section_content(content: &str, section_heading: &str) -> Option<String> {
    let heading_lower = section_heading.trim().to_lowercase();

    let mut in_section = false;
    let mut section_level = 0;
    let mut section_lines = Vec::new();

    for line in content.lines() {
        if let Some(caps) = SECTION_HEADING_RE.captures(line) {
            let current_level = caps.get(1).map_or(0, |m| m.as_str().len());
            let current_heading = caps.get(2).map_or("", |m| m.as_str());

            if !in_section && current_heading.trim().to_lowercase() == heading_lower {
                in_section = true;
                section_level = current_level;
                continue;
            } else if in_section && current_level <= section_level {
                break;
            }
        }

        if in_section {
            section_lines.push(line);
        }
    }

    in_section.then(|| section_lines.join("\n"))
}

/// Extract all bullet list items from a section, in document order.
///
/// A missing section yields an empty vec.
///
/// # Example
///
/// ```rust
/// use eqvis_index::markdown::helpers::extract_all_list_items;
///
/// let content = "## Authors\n\n- zanderman\n- saadwalid\n";
///
/// let items = extract_all_list_items(content, "Authors");
/// assert_eq!(items, vec!["zanderman", "saadwalid"]);
/// ```
pub fn extract_all_list_items(content: &str, section_heading: &str) -> Vec<String> {
    let Some(section) = extract_section_content(content, section_heading) else {
        return Vec::new();
    };

    section
        .lines()
        .filter_map(|line| {
            LIST_ITEM_RE
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
