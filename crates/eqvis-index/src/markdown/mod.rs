//! Reading rendered READMEs back.
//!
//! - [`parser`]: Markdown structure parsing (headings, link targets)
//! - [`helpers`]: Section and list item extraction
//! - [`summary`]: Listed media and authors of a rendered README

pub mod helpers;
pub mod parser;
pub mod summary;

pub use helpers::{extract_all_list_items, extract_section_content};
pub use parser::{LinkKind, LinkTarget, extract_first_heading, extract_link_targets};
pub use summary::{ListedMedia, ReadmeSummary};
