use anyhow::{Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub copy_to_clipboard: bool,
    #[serde(default = "default_true")]
    pub open_in_browser: bool,
    #[serde(default = "default_true")]
    pub show_notification: bool,
    #[serde(default)]
    pub extra_ref_patterns: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            copy_to_clipboard: true,
            open_in_browser: true,
            show_notification: true,
            extra_ref_patterns: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, or from the per-user config
    /// directory. The tool must work with no settings file at all, so a
    /// missing default-location file yields `Settings::default()`; only an
    /// explicitly requested file is required to exist.
    pub fn load(settings_file: Option<&str>) -> Result<Self> {
        match settings_file {
            Some(path) => {
                if !Path::new(path).exists() {
                    return Err(anyhow::anyhow!(
                        "settings.json not found at '{}'. Exiting...",
                        path
                    ));
                }
                Self::read_from(path)
            }
            None => match Self::default_settings_path() {
                Some(path) if path.exists() => {
                    Self::read_from(&path.to_string_lossy())
                }
                _ => {
                    debug!("No settings file found, using defaults.");
                    Ok(Settings::default())
                }
            },
        }
    }

    fn read_from(settings_file: &str) -> Result<Self> {
        let contents = fs::read_to_string(settings_file)
            .with_context(|| format!("Failed to read settings file: {}", settings_file))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", settings_file))?;

        info!("Settings loaded from '{}'.", settings_file);
        Ok(settings)
    }

    fn default_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sanitize-it").join("settings.json"))
    }

    /// Compile the user-supplied extra ref patterns. Invalid patterns are
    /// skipped with a warning rather than failing the whole run.
    pub fn compiled_extra_patterns(&self) -> Vec<Regex> {
        let mut compiled = Vec::new();
        for pattern in &self.extra_ref_patterns {
            match Regex::new(pattern) {
                Ok(re) => compiled.push(re),
                Err(e) => {
                    warn!("Ignoring invalid extra_ref_pattern '{}': {}", pattern, e);
                }
            }
        }
        compiled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_settings_load_valid() {
        let json_content = r#"{
            "copy_to_clipboard": true,
            "open_in_browser": false,
            "show_notification": false,
            "extra_ref_patterns": ["/share/.*$"]
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let settings = Settings::load(Some(temp_path)).unwrap();
        assert!(settings.copy_to_clipboard);
        assert!(!settings.open_in_browser);
        assert!(!settings.show_notification);
        assert_eq!(settings.extra_ref_patterns, vec!["/share/.*$"]);
    }

    #[test]
    fn test_settings_load_partial_uses_defaults() {
        let json_content = r#"{ "open_in_browser": false }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let settings = Settings::load(Some(temp_path)).unwrap();
        assert!(settings.copy_to_clipboard);
        assert!(!settings.open_in_browser);
        assert!(settings.show_notification);
        assert!(settings.extra_ref_patterns.is_empty());
    }

    #[test]
    fn test_settings_load_missing_explicit_file() {
        let result = Settings::load(Some("nonexistent_file.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.copy_to_clipboard);
        assert!(settings.open_in_browser);
        assert!(settings.show_notification);
        assert!(settings.extra_ref_patterns.is_empty());
    }

    #[test]
    fn test_compiled_extra_patterns_skips_invalid() {
        let settings = Settings {
            extra_ref_patterns: vec!["/share/.*$".to_string(), "(unclosed".to_string()],
            ..Settings::default()
        };

        let compiled = settings.compiled_extra_patterns();
        assert_eq!(compiled.len(), 1);
        assert!(compiled[0].is_match("/dp/item/share/xyz"));
    }
}
