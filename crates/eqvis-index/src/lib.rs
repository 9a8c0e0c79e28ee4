//! The eqmarl-vis document index.
//!
//! A [`DocumentIndex`] holds the project metadata, the ordered list of demo
//! videos published as release assets, and the ordered list of authors, and
//! renders them as the project README.
//!
//! # Modules
//!
//! - [`model`]: Validated entities (project, license, media, authors)
//! - [`index`]: [`DocumentIndex`] and its builder
//! - [`render`]: Markdown rendering and [`RenderOptions`]
//! - [`manifest`]: TOML authoring format
//! - [`markdown`]: Reading a rendered README back
//! - [`drift`]: Comparing a rendering with the README on disk
//!
//! # Example
//!
//! ```rust
//! use eqvis_index::Manifest;
//!
//! let manifest = Manifest::from_toml_str(r#"
//! [project]
//! name = "eqmarl-vis"
//! description = "Demo videos for eQMARL."
//! related_project = "https://github.com/news-vt/eqmarl"
//!
//! [project.license]
//! name = "CC-BY-4.0"
//! badge_url = "https://img.shields.io/badge/License-CC_BY_4.0-lightgrey.svg"
//! license_url = "https://creativecommons.org/licenses/by/4.0/"
//! "#)?;
//!
//! let index = manifest.into_index()?;
//! let readme = index.render();
//! assert!(readme.contains("## Media\n"));
//! # Ok::<(), eqvis_core::Error>(())
//! ```

pub mod drift;
pub mod index;
pub mod manifest;
pub mod markdown;
pub mod model;
pub mod render;

pub use drift::{Drift, compare};
pub use index::{DocumentIndex, DocumentIndexBuilder};
pub use manifest::Manifest;
pub use markdown::ReadmeSummary;
pub use model::{AuthorEntry, LicenseRef, MediaEntry, PaperRef, ProjectMetadata};
pub use render::RenderOptions;

// Re-export HeadingLevel for convenience
pub use pulldown_cmark::HeadingLevel;
