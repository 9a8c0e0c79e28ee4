//! Configuration for the `eqvis` command.
//!
//! Values are resolved in order: built-in defaults, the config file,
//! `EQVIS_MANIFEST` / `EQVIS_README` environment variables, then command-line
//! flags (applied by the command handlers).

use std::path::{Path, PathBuf};

use eqvis_core::{Error, Result, expand_tilde};
use eqvis_index::RenderOptions;
use eqvis_index::render::{DEFAULT_AUTHORS_HEADING, DEFAULT_MEDIA_HEADING};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the manifest path.
pub const ENV_MANIFEST: &str = "EQVIS_MANIFEST";

/// Environment variable overriding the README path.
pub const ENV_README: &str = "EQVIS_README";

/// Resolved `eqvis` configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EqvisConfig {
    /// Manifest describing the document index
    pub manifest: String,
    /// README rendered from the manifest
    pub readme: String,
    /// Section headings
    pub render: RenderConfig,
}

/// `[render]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub media_heading: String,
    pub authors_heading: String,
}

impl Default for EqvisConfig {
    fn default() -> Self {
        Self {
            manifest: "eqvis.toml".to_string(),
            readme: "README.md".to_string(),
            render: RenderConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            media_heading: DEFAULT_MEDIA_HEADING.to_string(),
            authors_heading: DEFAULT_AUTHORS_HEADING.to_string(),
        }
    }
}

impl RenderConfig {
    /// Validate the headings and convert them for rendering.
    pub fn to_options(&self) -> Result<RenderOptions> {
        RenderOptions::new(self.media_heading.as_str(), self.authors_heading.as_str())
    }
}

impl EqvisConfig {
    /// Name used in user-facing hints.
    pub const PROJECT_NAME: &'static str = "eqvis";

    /// `<platform config dir>/eqvis/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path if given (with `~` expanded), else the default path.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(expand_tilde(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration and apply environment overrides.
    ///
    /// A missing default config file yields defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Self::default()
            }
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse and validate a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.render.to_options()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply `EQVIS_MANIFEST` / `EQVIS_README` from the given lookup.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(manifest) = lookup(ENV_MANIFEST) {
            self.manifest = manifest;
        }
        if let Some(readme) = lookup(ENV_README) {
            self.readme = readme;
        }
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        expand_tilde(&self.manifest)
    }

    pub fn readme_path(&self) -> PathBuf {
        expand_tilde(&self.readme)
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        self.render.to_options()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EqvisConfig::default();
        assert_eq!(config.manifest_path(), PathBuf::from("eqvis.toml"));
        assert_eq!(config.readme_path(), PathBuf::from("README.md"));
        assert_eq!(config.render_options().unwrap(), RenderOptions::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = EqvisConfig::from_toml_str("[render]\nmedia_heading = \"Videos\"\n").unwrap();
        assert_eq!(config.render.media_heading, "Videos");
        assert_eq!(config.render.authors_heading, "Authors");
        assert_eq!(config.readme, "README.md");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = EqvisConfig::from_toml_str("output = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("output"));
    }

    #[test]
    fn test_duplicate_headings_rejected() {
        let err = EqvisConfig::from_toml_str("[render]\nauthors_heading = \"media\"\n").unwrap_err();
        assert_eq!(err.field(), Some("render.authors_heading"));
    }

    #[test]
    fn test_empty_heading_rejected() {
        let err = EqvisConfig::from_toml_str("[render]\nmedia_heading = \"\"\n").unwrap_err();
        assert_eq!(err.field(), Some("render.media_heading"));
    }

    #[test]
    fn test_multiline_heading_rejected() {
        let err =
            EqvisConfig::from_toml_str("[render]\nmedia_heading = \"Media\\nMore\"\n").unwrap_err();
        assert_eq!(err.field(), Some("render.media_heading"));
    }

    #[test]
    fn test_env_overrides() {
        let config = EqvisConfig::default().with_env_overrides(|key| match key {
            ENV_MANIFEST => Some("docs/index.toml".to_string()),
            _ => None,
        });
        assert_eq!(config.manifest, "docs/index.toml");
        assert_eq!(config.readme, "README.md");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EqvisConfig::default();
        let reparsed = EqvisConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "readme = \"docs/README.md\"\n").unwrap();

        let config = EqvisConfig::from_file(&path).unwrap();
        assert_eq!(config.readme, "docs/README.md");
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = EqvisConfig::load(path.to_str()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = EqvisConfig::resolve_config_path(Some("/etc/eqvis/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/etc/eqvis/config.toml")));
    }
}
