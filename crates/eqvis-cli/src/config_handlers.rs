//! Handler functions for config CLI commands.
//!
//! Implements the `path`, `get`, `set`, and `init` subcommands over
//! [`EqvisConfig`], plus the TOML dotted-key helpers they share.

use std::path::PathBuf;

use eqvis_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::EqvisConfig;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => {
            cmd_config_init(file.as_deref().or(config_path), force).map(|_| ())
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = EqvisConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!(
            "(file does not exist, run `{} config init` to create it)",
            EqvisConfig::PROJECT_NAME
        );
    }
    Ok(())
}

/// Print a configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = EqvisConfig::load(config_path)?;
    println!("{}", config_value(&config, key)?);
    Ok(())
}

/// Look up a dotted key in the resolved configuration.
pub fn config_value(config: &EqvisConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Set a configuration value by dotted key in the config file.
///
/// The updated document must still be a valid configuration; otherwise the
/// file is left untouched.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = EqvisConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            EqvisConfig::PROJECT_NAME
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, toml::Value::String(value.to_string()))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    EqvisConfig::from_toml_str(&toml_str)
        .map_err(|e| Error::config(format!("Refusing to set '{key}': {e}")))?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Create a default configuration file and return its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = EqvisConfig::resolve_config_path(file)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = EqvisConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(path)
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return Err(Error::config("Empty key path"));
    };

    let mut current = root;
    for part in parents {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_default_config(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, EqvisConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    // ------------------------------------------------------------------------
    // cmd_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/config.toml")).is_ok());
    }

    // ------------------------------------------------------------------------
    // config_value / cmd_config_get tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_value_simple_key() {
        let config = EqvisConfig::default();
        assert_eq!(config_value(&config, "readme").unwrap(), "README.md");
    }

    #[test]
    fn test_config_value_nested_key() {
        let config = EqvisConfig::default();
        assert_eq!(config_value(&config, "render.media_heading").unwrap(), "Media");
    }

    #[test]
    fn test_config_value_table() {
        let config = EqvisConfig::default();
        let rendered = config_value(&config, "render").unwrap();
        assert!(rendered.contains("authors_heading = \"Authors\""));
    }

    #[test]
    fn test_cmd_config_get_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);

        let result = cmd_config_get(path.to_str(), "render.nonexistent");
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_set tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_set_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);

        cmd_config_set(path.to_str(), "render.media_heading", "Videos").unwrap();

        let config = EqvisConfig::from_file(&path).unwrap();
        assert_eq!(config.render.media_heading, "Videos");
    }

    #[test]
    fn test_cmd_config_set_rejects_unknown_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        let result = cmd_config_set(path.to_str(), "render.footer", "x");
        assert!(result.unwrap_err().to_string().contains("Refusing"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_rejects_duplicate_heading() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        let result = cmd_config_set(path.to_str(), "render.authors_heading", "Media");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Refusing"));
        assert!(message.contains("render.authors_heading"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let result = cmd_config_set(Some("/nonexistent/config.toml"), "readme", "x.md");
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_init tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("eqvis").join("config.toml");

        let created = cmd_config_init(path.to_str(), false).unwrap();
        assert_eq!(created, path);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("manifest = \"eqvis.toml\""));
        assert!(content.contains("[render]"));
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let result = cmd_config_init(path.to_str(), false);
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[test]
    fn test_cmd_config_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "old content").unwrap();

        cmd_config_init(path.to_str(), true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("readme"));
    }

    // ------------------------------------------------------------------------
    // get_nested_value / set_nested_value tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value_nested() {
        let val: toml::Value = toml::from_str("[render]\nmedia_heading = \"Videos\"").unwrap();
        assert_eq!(
            get_nested_value(&val, "render.media_heading"),
            Some(&toml::Value::String("Videos".to_string()))
        );
    }

    #[test]
    fn test_get_nested_value_through_scalar() {
        let val: toml::Value = toml::from_str("readme = \"README.md\"").unwrap();
        assert!(get_nested_value(&val, "readme.path").is_none());
    }

    #[test]
    fn test_set_nested_value_creates_section() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "render.authors_heading", "Team".into()).unwrap();
        assert_eq!(
            get_nested_value(&val, "render.authors_heading"),
            Some(&toml::Value::String("Team".to_string()))
        );
    }

    #[test]
    fn test_set_nested_value_into_scalar_fails() {
        let mut val: toml::Value = toml::from_str("readme = \"README.md\"").unwrap();
        assert!(set_nested_value(&mut val, "readme.path", "x".into()).is_err());
    }

    // ------------------------------------------------------------------------
    // format_toml_value tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_format_toml_value() {
        assert_eq!(format_toml_value(&toml::Value::String("hello".into())), "hello");
        assert_eq!(format_toml_value(&toml::Value::Integer(42)), "42");
        assert_eq!(format_toml_value(&toml::Value::Boolean(true)), "true");
    }
}
