//! TOML manifest describing a document index.
//!
//! The manifest is the authoring format: it is deserialized as-is and only
//! validated when converted into a [`DocumentIndex`].
//!
//! ```toml
//! [project]
//! name = "eqmarl-vis"
//! description = "Demo videos for eQMARL."
//! related_project = "https://github.com/news-vt/eqmarl"
//!
//! [project.license]
//! name = "CC-BY-4.0"
//! badge_url = "https://img.shields.io/badge/License-CC_BY_4.0-lightgrey.svg"
//! license_url = "https://creativecommons.org/licenses/by/4.0/"
//!
//! [[media]]
//! label = "ICAB Demo"
//! description = "Conference demo."
//! release_tag = "icab-demo"
//! release_url = "https://github.com/news-vt/eqmarl-vis/releases/tag/icab-demo"
//!
//! [[authors]]
//! display_name = "zanderman"
//! profile_url = "https://github.com/zanderman"
//! badge_image_url = "https://img.shields.io/badge/GitHub-zanderman-blue"
//! ```

use std::path::Path;

use eqvis_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::index::DocumentIndex;
use crate::model::{AuthorEntry, LicenseRef, MediaEntry, PaperRef, ProjectMetadata};

/// Top-level manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub project: ProjectSpec,
    #[serde(default)]
    pub media: Vec<MediaSpec>,
    #[serde(default)]
    pub authors: Vec<AuthorSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSpec {
    pub name: String,
    pub description: String,
    pub related_project: String,
    pub license: LicenseSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<PaperSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LicenseSpec {
    pub name: String,
    pub badge_url: String,
    pub license_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaperSpec {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaSpec {
    pub label: String,
    pub description: String,
    pub release_tag: String,
    pub release_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorSpec {
    pub display_name: String,
    pub profile_url: String,
    pub badge_image_url: String,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(format!("Invalid manifest: {e}")))
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Loaded manifest from {}", path.display());
        toml::from_str(&content)
            .map_err(|e| Error::parse(format!("Invalid manifest {}: {e}", path.display())))
    }

    /// Validate every entry and build the index.
    ///
    /// Validation errors name the offending entry, e.g. `media[1].release_url`.
    pub fn into_index(self) -> Result<DocumentIndex> {
        let ProjectSpec {
            name,
            description,
            related_project,
            license,
            paper,
        } = self.project;

        let license = LicenseRef::new(license.name, license.badge_url, license.license_url)?;
        let mut project = ProjectMetadata::new(name, license, description, related_project)?;
        if let Some(paper) = paper {
            project = project.with_paper(PaperRef::new(paper.title, paper.url)?);
        }

        let mut builder = DocumentIndex::builder(project);
        for (i, spec) in self.media.into_iter().enumerate() {
            let entry = MediaEntry::new(
                spec.label,
                spec.description,
                spec.release_tag,
                spec.release_url,
            )
            .map_err(|e| locate(e, "media", i))?;
            builder = builder.media(entry);
        }
        for (i, spec) in self.authors.into_iter().enumerate() {
            let author = AuthorEntry::new(spec.display_name, spec.profile_url, spec.badge_image_url)
                .map_err(|e| locate(e, "authors", i))?;
            builder = builder.author(author);
        }
        builder.build()
    }

    /// Describe an existing index as a manifest.
    pub fn from_index(index: &DocumentIndex) -> Self {
        let project = index.project();
        let license = project.license();
        Self {
            project: ProjectSpec {
                name: project.name().to_string(),
                description: project.description().to_string(),
                related_project: project.related_project().to_string(),
                license: LicenseSpec {
                    name: license.name().to_string(),
                    badge_url: license.badge_url().to_string(),
                    license_url: license.license_url().to_string(),
                },
                paper: project.paper().map(|paper| PaperSpec {
                    title: paper.title().to_string(),
                    url: paper.url().to_string(),
                }),
            },
            media: index
                .media()
                .iter()
                .map(|entry| MediaSpec {
                    label: entry.label().to_string(),
                    description: entry.description().to_string(),
                    release_tag: entry.release_tag().to_string(),
                    release_url: entry.release_url().to_string(),
                })
                .collect(),
            authors: index
                .authors()
                .iter()
                .map(|author| AuthorSpec {
                    display_name: author.display_name().to_string(),
                    profile_url: author.profile_url().to_string(),
                    badge_image_url: author.badge_image_url().to_string(),
                })
                .collect(),
        }
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::parse(format!("Cannot serialize manifest: {e}")))
    }
}

/// Rewrite `media.label` into `media[3].label`.
fn locate(err: Error, section: &str, index: usize) -> Error {
    match err {
        Error::Validation {
            field: Some(field),
            message,
        } => {
            let rest = field
                .strip_prefix(section)
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(field.as_str());
            Error::validation_field(format!("{section}[{index}].{rest}"), message)
        }
        other => other,
    }
}

// ============================================================================
// Tests
// ============================================================================
