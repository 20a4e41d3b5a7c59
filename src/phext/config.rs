use crate::error::{PhextError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LABEL: &str = "holiday";
const DEFAULT_PREVIEW_WIDTH: usize = 250;

/// Configuration for phext, stored in $PHEXT_HOME/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhextConfig {
    /// Label used when none is given (or the given one is blank)
    #[serde(default = "default_label")]
    pub default_label: String,

    /// Columns of scroll text shown per entry when listing
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_preview_width() -> usize {
    DEFAULT_PREVIEW_WIDTH
}

impl Default for PhextConfig {
    fn default() -> Self {
        Self {
            default_label: default_label(),
            preview_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}

impl PhextConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhextError::Io)?;
        let config: PhextConfig =
            serde_json::from_str(&content).map_err(PhextError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PhextError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PhextError::Serialization)?;
        fs::write(config_path, content).map_err(PhextError::Io)?;
        Ok(())
    }

    /// Falls back to the default label for blank input.
    pub fn resolve_label(&self, label: Option<&str>) -> String {
        match label.map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => self.default_label.clone(),
        }
    }

    pub fn set_default_label(&mut self, label: &str) -> Result<()> {
        let label = label.trim();
        if label.is_empty() {
            return Err(PhextError::Api("Default label cannot be blank".to_string()));
        }
        self.default_label = label.to_string();
        Ok(())
    }

    pub fn set_preview_width(&mut self, value: &str) -> Result<()> {
        let width: usize = value
            .trim()
            .parse()
            .map_err(|_| PhextError::Api(format!("Invalid preview width: {}", value)))?;
        if width == 0 {
            return Err(PhextError::Api("Preview width must be at least 1".to_string()));
        }
        self.preview_width = width;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PhextConfig::default();
        assert_eq!(config.default_label, "holiday");
        assert_eq!(config.preview_width, 250);
    }

    #[test]
    fn test_resolve_label() {
        let config = PhextConfig::default();
        assert_eq!(config.resolve_label(Some("notes")), "notes");
        assert_eq!(config.resolve_label(Some("  ")), "holiday");
        assert_eq!(config.resolve_label(None), "holiday");
    }

    #[test]
    fn test_setters_validate() {
        let mut config = PhextConfig::default();
        assert!(config.set_default_label(" ").is_err());
        config.set_default_label(" work ").unwrap();
        assert_eq!(config.default_label, "work");

        assert!(config.set_preview_width("wide").is_err());
        assert!(config.set_preview_width("0").is_err());
        config.set_preview_width("80").unwrap();
        assert_eq!(config.preview_width, 80);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = PhextConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, PhextConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = PhextConfig::default();
        config.set_preview_width("40").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = PhextConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"preview_width": 12}"#).unwrap();
        let loaded = PhextConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.preview_width, 12);
        assert_eq!(loaded.default_label, "holiday");
    }
}
