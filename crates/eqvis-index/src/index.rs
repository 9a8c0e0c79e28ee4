//! The document index and its validating builder.

use std::collections::HashSet;

use eqvis_core::{Error, Result};

use crate::model::{AuthorEntry, MediaEntry, ProjectMetadata};
use crate::render::{RenderOptions, render_document};

/// Fully populated, immutable description of the project README.
///
/// A `DocumentIndex` can only be obtained through
/// [`DocumentIndex::builder`], which rejects malformed input up front.
/// Rendering is therefore infallible.
///
/// # Example
///
/// ```rust
/// use eqvis_index::{AuthorEntry, DocumentIndex, LicenseRef, MediaEntry, ProjectMetadata};
///
/// let license = LicenseRef::new(
///     "CC-BY-4.0",
///     "https://img.shields.io/badge/License-CC_BY_4.0-lightgrey.svg",
///     "https://creativecommons.org/licenses/by/4.0/",
/// )?;
/// let project = ProjectMetadata::new(
///     "eqmarl-vis",
///     license,
///     "Demo videos for eQMARL.",
///     "https://github.com/news-vt/eqmarl",
/// )?;
///
/// let index = DocumentIndex::builder(project)
///     .media(MediaEntry::new(
///         "ICAB Demo",
///         "Conference demo.",
///         "icab-demo",
///         "https://github.com/news-vt/eqmarl-vis/releases/tag/icab-demo",
///     )?)
///     .author(AuthorEntry::new(
///         "zanderman",
///         "https://github.com/zanderman",
///         "https://img.shields.io/badge/GitHub-zanderman-blue",
///     )?)
///     .build()?;
///
/// let readme = index.render();
/// assert!(readme.starts_with("# eqmarl-vis\n"));
/// assert_eq!(readme, index.render());
/// # Ok::<(), eqvis_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIndex {
    project: ProjectMetadata,
    media: Vec<MediaEntry>,
    authors: Vec<AuthorEntry>,
}

impl DocumentIndex {
    /// Start building an index for the given project.
    pub fn builder(project: ProjectMetadata) -> DocumentIndexBuilder {
        DocumentIndexBuilder::new(project)
    }

    pub fn project(&self) -> &ProjectMetadata {
        &self.project
    }

    /// Media entries in display order.
    pub fn media(&self) -> &[MediaEntry] {
        &self.media
    }

    /// Authors in listing order.
    pub fn authors(&self) -> &[AuthorEntry] {
        &self.authors
    }

    /// Render the README body with the default section headings.
    ///
    /// Pure and deterministic: the same index always renders to the same
    /// bytes.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render the README body with custom section headings.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        render_document(self, options)
    }
}

/// Collects entries for a [`DocumentIndex`] and validates them together.
#[derive(Debug, Clone)]
pub struct DocumentIndexBuilder {
    project: ProjectMetadata,
    media: Vec<MediaEntry>,
    authors: Vec<AuthorEntry>,
}

impl DocumentIndexBuilder {
    fn new(project: ProjectMetadata) -> Self {
        Self {
            project,
            media: Vec::new(),
            authors: Vec::new(),
        }
    }

    /// Append a media entry; entries render in the order they are added.
    pub fn media(mut self, entry: MediaEntry) -> Self {
        self.media.push(entry);
        self
    }

    /// Append an author; authors render in the order they are added.
    pub fn author(mut self, entry: AuthorEntry) -> Self {
        self.authors.push(entry);
        self
    }

    /// Check document-wide invariants and produce the index.
    ///
    /// Fails if two authors share a display name. Repeated release tags are
    /// accepted with a warning since the asset host owns tag uniqueness.
    pub fn build(self) -> Result<DocumentIndex> {
        let mut names = HashSet::new();
        for (i, author) in self.authors.iter().enumerate() {
            if !names.insert(author.display_name()) {
                return Err(Error::validation_field(
                    format!("authors[{i}].display_name"),
                    format!("duplicate author '{}'", author.display_name()),
                ));
            }
        }

        let mut tags = HashSet::new();
        for entry in &self.media {
            if !tags.insert(entry.release_tag()) {
                log::warn!(
                    "Release tag '{}' is used by more than one media entry",
                    entry.release_tag()
                );
            }
        }

        log::debug!(
            "Built document index for '{}' ({} media, {} authors)",
            self.project.name(),
            self.media.len(),
            self.authors.len()
        );

        Ok(DocumentIndex {
            project: self.project,
            media: self.media,
            authors: self.authors,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
