//! Configuration file support for depsnap.
//!
//! Provides YAML-based configuration through `depsnap.config.yml` files
//! discovered in the project folder. Command-line arguments always take
//! precedence over config values.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "depsnap.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub depth_limit: Option<usize>,
    pub ignore_dependencies: Option<Vec<String>>,
    pub ignore_libraries: Option<Vec<String>>,
    pub requirements_file_name: Option<String>,
    pub output_path: Option<String>,
    /// Interpreter binary used for the pip and pipdeptree adapters
    pub python: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
depth_limit: 2
ignore_dependencies:
  - torch
ignore_libraries:
  - setuptools
  - pip
requirements_file_name: pins.txt
output_path: build
python: python3.12
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.depth_limit, Some(2));
        assert_eq!(config.ignore_dependencies.as_deref(), Some(&["torch".to_string()][..]));
        assert_eq!(config.ignore_libraries.as_ref().map(|v| v.len()), Some(2));
        assert_eq!(config.requirements_file_name.as_deref(), Some("pins.txt"));
        assert_eq!(config.output_path.as_deref(), Some("build"));
        assert_eq!(config.python.as_deref(), Some("python3.12"));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "depth_limit: 3\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.depth_limit, Some(3));
        assert!(config.ignore_dependencies.is_none());
        assert!(config.python.is_none());
    }

    #[test]
    fn test_load_config_captures_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "depth_limit: 1\ntypo_field: true\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("typo_field"));
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "depth_limit: [unclosed\n").unwrap();

        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_discover_config_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_config_present() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "depth_limit: 5\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.depth_limit, Some(5));
    }
}
