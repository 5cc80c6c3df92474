use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;
use crate::slugify::SlugOptions;
use crate::utils::io;

/// Root configuration structure for slugkit.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SlugkitConfig {
    #[serde(default)]
    pub defaults: SlugOptions,
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load default slug options, merging file config with built-in defaults.
/// If slugkit.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> SlugOptions {
    load_config().defaults
}

/// Load the full slugkit.json config, falling back to defaults on any error.
pub fn load_config() -> SlugkitConfig {
    paths::slugkit_json()
        .ok()
        .filter(|path| path.exists())
        .and_then(|path| load_config_from(&path).ok())
        .unwrap_or_default()
}

/// Read and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> crate::Result<SlugkitConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    let config: SlugkitConfig = serde_json::from_str(&content).map_err(|e| {
        crate::Error::validation_invalid_json(e, Some(format!("parse {}", path.display())))
    })?;

    if config.defaults.max_length == Some(0) {
        return Err(crate::Error::config_invalid_value(
            "defaults.maxLength",
            Some("0".to_string()),
            "Max length must be at least 1",
        ));
    }

    Ok(config)
}

/// Load config for editing: an absent file means built-in defaults,
/// but an unreadable or invalid file is an error so it is never overwritten.
pub fn load_config_strict_from(path: &Path) -> crate::Result<SlugkitConfig> {
    if !path.exists() {
        return Ok(SlugkitConfig::default());
    }
    load_config_from(path)
}

/// Save config to slugkit.json (creates if missing).
pub fn save_config(config: &SlugkitConfig) -> crate::Result<()> {
    save_config_to(&paths::slugkit_json()?, config)
}

pub fn save_config_to(path: &Path, config: &SlugkitConfig) -> crate::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("serialize slugkit.json".to_string()))
    })?;

    io::write_file_atomic(path, &content, &format!("write {}", path.display()))
}

/// Check if slugkit.json file exists
pub fn config_exists() -> bool {
    paths::slugkit_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete slugkit.json (reset to defaults)
pub fn reset_config() -> crate::Result<bool> {
    let path = paths::slugkit_json()?;

    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to slugkit.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::slugkit_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> SlugOptions {
    SlugOptions::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slugify::UnicodePolicy;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("slugkit.json");
        let config = SlugkitConfig {
            defaults: SlugOptions {
                unicode: UnicodePolicy::Transliterate,
                max_length: Some(40),
            },
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn missing_fields_fall_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slugkit.json");
        fs::write(&path, r#"{"defaults": {"maxLength": 20}}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.defaults.unicode, UnicodePolicy::Separator);
        assert_eq!(config.defaults.max_length, Some(20));
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slugkit.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
    }

    #[test]
    fn zero_max_length_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slugkit.json");
        fs::write(&path, r#"{"defaults": {"maxLength": 0}}"#).unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slugkit.json");
        fs::write(&path, r#"{"defaults": {"maxLenght": 20}}"#).unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
    }

    #[test]
    fn strict_load_treats_absent_file_as_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_strict_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, SlugkitConfig::default());
    }

    #[test]
    fn strict_load_propagates_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slugkit.json");
        fs::write(&path, "{\"defaults\": {}, oops").unwrap();

        assert!(load_config_strict_from(&path).is_err());
    }

    #[test]
    fn builtin_defaults_use_separator_policy() {
        let defaults = builtin_defaults();
        assert_eq!(defaults.unicode, UnicodePolicy::Separator);
        assert_eq!(defaults.max_length, None);
    }
}
