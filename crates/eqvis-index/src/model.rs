//! Entities held by a [`DocumentIndex`](crate::DocumentIndex).
//!
//! Every entity is validated by its constructor and immutable afterwards:
//! fields are private and only exposed through accessors. Validation errors
//! carry a field path such as `media.release_url`; the manifest loader
//! rewrites it to include the entry position (`media[2].release_url`).

use eqvis_core::{
    Error, Result, require_link_text, require_paragraph, require_single_line, require_url,
};

/// License the project is published under, with its badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRef {
    name: String,
    badge_url: String,
    license_url: String,
}

impl LicenseRef {
    /// Create a license reference.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eqvis_index::LicenseRef;
    ///
    /// let license = LicenseRef::new(
    ///     "CC-BY-4.0",
    ///     "https://img.shields.io/badge/License-CC_BY_4.0-lightgrey.svg",
    ///     "https://creativecommons.org/licenses/by/4.0/",
    /// )
    /// .unwrap();
    /// assert_eq!(license.name(), "CC-BY-4.0");
    /// ```
    pub fn new(
        name: impl Into<String>,
        badge_url: impl Into<String>,
        license_url: impl Into<String>,
    ) -> Result<Self> {
        let license = Self {
            name: name.into(),
            badge_url: badge_url.into(),
            license_url: license_url.into(),
        };
        require_link_text("project.license.name", &license.name)?;
        require_url("project.license.badge_url", &license.badge_url)?;
        require_url("project.license.license_url", &license.license_url)?;
        Ok(license)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn badge_url(&self) -> &str {
        &self.badge_url
    }

    pub fn license_url(&self) -> &str {
        &self.license_url
    }
}

/// Publication the videos accompany.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRef {
    title: String,
    url: String,
}

impl PaperRef {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let paper = Self {
            title: title.into(),
            url: url.into(),
        };
        require_link_text("project.paper.title", &paper.title)?;
        require_url("project.paper.url", &paper.url)?;
        Ok(paper)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Project provenance: name, license, description and related code repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    name: String,
    license: LicenseRef,
    description: String,
    related_project: String,
    paper: Option<PaperRef>,
}

impl ProjectMetadata {
    /// Create project metadata.
    ///
    /// The description may span several lines; every other text field must
    /// be a single line.
    pub fn new(
        name: impl Into<String>,
        license: LicenseRef,
        description: impl Into<String>,
        related_project: impl Into<String>,
    ) -> Result<Self> {
        let project = Self {
            name: name.into(),
            license,
            description: description.into(),
            related_project: related_project.into(),
            paper: None,
        };
        require_single_line("project.name", &project.name)?;
        require_paragraph("project.description", &project.description)?;
        require_url("project.related_project", &project.related_project)?;
        Ok(project)
    }

    /// Attach the publication the videos accompany.
    pub fn with_paper(mut self, paper: PaperRef) -> Self {
        self.paper = Some(paper);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license(&self) -> &LicenseRef {
        &self.license
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Link to the related eQMARL source repository.
    pub fn related_project(&self) -> &str {
        &self.related_project
    }

    pub fn paper(&self) -> Option<&PaperRef> {
        self.paper.as_ref()
    }
}

/// A described pointer to one externally hosted release asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    label: String,
    description: String,
    release_tag: String,
    release_url: String,
}

impl MediaEntry {
    /// Create a media entry.
    ///
    /// The release tag is rendered as an inline code span, so it may not
    /// contain whitespace or backticks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eqvis_index::MediaEntry;
    ///
    /// let entry = MediaEntry::new(
    ///     "ICAB Demo",
    ///     "Walkthrough of eQMARL on the CoinGame environment.",
    ///     "icab-demo",
    ///     "https://example.org/releases/icab-demo",
    /// )
    /// .unwrap();
    /// assert_eq!(entry.release_tag(), "icab-demo");
    ///
    /// assert!(MediaEntry::new("Demo", "x", "icab demo", "https://example.org").is_err());
    /// ```
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        release_tag: impl Into<String>,
        release_url: impl Into<String>,
    ) -> Result<Self> {
        let entry = Self {
            label: label.into(),
            description: description.into(),
            release_tag: release_tag.into(),
            release_url: release_url.into(),
        };
        require_single_line("media.label", &entry.label)?;
        require_single_line("media.description", &entry.description)?;
        require_single_line("media.release_tag", &entry.release_tag)?;
        if entry
            .release_tag
            .chars()
            .any(|c| c.is_whitespace() || c == '`')
        {
            return Err(Error::validation_field(
                "media.release_tag",
                format!(
                    "'{}' must not contain whitespace or backticks",
                    entry.release_tag
                ),
            ));
        }
        require_url("media.release_url", &entry.release_url)?;
        Ok(entry)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tag identifying the release on the external asset host.
    pub fn release_tag(&self) -> &str {
        &self.release_tag
    }

    pub fn release_url(&self) -> &str {
        &self.release_url
    }
}

/// One listed author with a profile badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
    display_name: String,
    profile_url: String,
    badge_image_url: String,
}

impl AuthorEntry {
    pub fn new(
        display_name: impl Into<String>,
        profile_url: impl Into<String>,
        badge_image_url: impl Into<String>,
    ) -> Result<Self> {
        let author = Self {
            display_name: display_name.into(),
            profile_url: profile_url.into(),
            badge_image_url: badge_image_url.into(),
        };
        require_link_text("authors.display_name", &author.display_name)?;
        require_url("authors.profile_url", &author.profile_url)?;
        require_url("authors.badge_image_url", &author.badge_image_url)?;
        Ok(author)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    pub fn badge_image_url(&self) -> &str {
        &self.badge_image_url
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn license() -> LicenseRef {
        LicenseRef::new(
            "CC-BY-4.0",
            "https://img.shields.io/badge/License-CC_BY_4.0-lightgrey.svg",
            "https://creativecommons.org/licenses/by/4.0/",
        )
        .unwrap()
    }

    // ------------------------------------------------------------------------
    // LicenseRef / PaperRef
    // ------------------------------------------------------------------------

    #[test]
    fn test_license_accessors() {
        let license = license();
        assert_eq!(license.name(), "CC-BY-4.0");
        assert_eq!(
            license.license_url(),
            "https://creativecommons.org/licenses/by/4.0/"
        );
    }

    #[test]
    fn test_license_rejects_bad_badge_url() {
        let err = LicenseRef::new("MIT", "shields/mit.svg", "https://opensource.org/license/mit")
            .unwrap_err();
        assert_eq!(err.field(), Some("project.license.badge_url"));
    }

    #[test]
    fn test_paper_rejects_empty_title() {
        let err = PaperRef::new("", "https://arxiv.org/abs/2405.17486").unwrap_err();
        assert_eq!(err.field(), Some("project.paper.title"));
    }

    // ------------------------------------------------------------------------
    // ProjectMetadata
    // ------------------------------------------------------------------------

    #[test]
    fn test_project_allows_multiline_description() {
        let project = ProjectMetadata::new(
            "eqmarl-vis",
            license(),
            "Videos for eQMARL.\nRendered with Manim.",
            "https://github.com/news-vt/eqmarl",
        )
        .unwrap();
        assert!(project.description().contains('\n'));
        assert!(project.paper().is_none());
    }

    #[test]
    fn test_project_rejects_multiline_name() {
        let err = ProjectMetadata::new(
            "eqmarl\nvis",
            license(),
            "desc",
            "https://github.com/news-vt/eqmarl",
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("project.name"));
    }

    #[test]
    fn test_project_rejects_relative_related_link() {
        let err = ProjectMetadata::new("eqmarl-vis", license(), "desc", "../eqmarl").unwrap_err();
        assert_eq!(err.field(), Some("project.related_project"));
    }

    #[test]
    fn test_project_rejects_heading_in_description() {
        let err = ProjectMetadata::new(
            "eqmarl-vis",
            license(),
            "Videos for eQMARL.\n## Authors",
            "https://github.com/news-vt/eqmarl",
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("project.description"));
    }

    #[test]
    fn test_project_rejects_angle_bracket_in_related_link() {
        let err = ProjectMetadata::new("eqmarl-vis", license(), "desc", "https://example.org/a>b")
            .unwrap_err();
        assert_eq!(err.field(), Some("project.related_project"));
    }

    #[test]
    fn test_license_rejects_bracket_in_name() {
        let err = LicenseRef::new(
            "CC]BY",
            "https://img.shields.io/badge/License-CC_BY_4.0-lightgrey.svg",
            "https://creativecommons.org/licenses/by/4.0/",
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("project.license.name"));
    }

    #[test]
    fn test_paper_rejects_bracket_in_title() {
        let err = PaperRef::new("eQMARL [preprint]", "https://arxiv.org/abs/2405.17486").unwrap_err();
        assert_eq!(err.field(), Some("project.paper.title"));
    }

    #[test]
    fn test_project_with_paper() {
        let paper = PaperRef::new("eQMARL", "https://arxiv.org/abs/2405.17486").unwrap();
        let project = ProjectMetadata::new(
            "eqmarl-vis",
            license(),
            "desc",
            "https://github.com/news-vt/eqmarl",
        )
        .unwrap()
        .with_paper(paper.clone());
        assert_eq!(project.paper(), Some(&paper));
    }

    // ------------------------------------------------------------------------
    // MediaEntry / AuthorEntry
    // ------------------------------------------------------------------------

    #[test]
    fn test_media_rejects_backtick_tag() {
        let err = MediaEntry::new("Demo", "desc", "icab`demo", "https://example.org").unwrap_err();
        assert_eq!(err.field(), Some("media.release_tag"));
    }

    #[test]
    fn test_media_rejects_multiline_description() {
        let err = MediaEntry::new("Demo", "one\ntwo", "icab-demo", "https://example.org")
            .unwrap_err();
        assert_eq!(err.field(), Some("media.description"));
    }

    #[test]
    fn test_media_rejects_unbalanced_paren_in_release_url() {
        let err = MediaEntry::new("Demo", "desc", "icab-demo", "https://example.org/v)x").unwrap_err();
        assert_eq!(err.field(), Some("media.release_url"));
    }

    #[test]
    fn test_author_rejects_bracket_in_name() {
        let err = AuthorEntry::new(
            "zander]man",
            "https://github.com/zanderman",
            "https://img.shields.io/badge/GitHub-zanderman-blue",
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("authors.display_name"));
    }

    #[test]
    fn test_author_rejects_paren_in_profile_url() {
        let err = AuthorEntry::new(
            "zanderman",
            "https://github.com/zanderman)",
            "https://img.shields.io/badge/GitHub-zanderman-blue",
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("authors.profile_url"));
    }

    #[test]
    fn test_author_rejects_empty_name() {
        let err = AuthorEntry::new(
            "  ",
            "https://github.com/zanderman",
            "https://img.shields.io/badge/GitHub-zanderman-blue",
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("authors.display_name"));
    }

    #[test]
    fn test_author_accessors() {
        let author = AuthorEntry::new(
            "saadwalid",
            "https://github.com/saadwalid",
            "https://img.shields.io/badge/GitHub-saadwalid-blue",
        )
        .unwrap();
        assert_eq!(author.display_name(), "saadwalid");
        assert_eq!(author.profile_url(), "https://github.com/saadwalid");
    }
}
