use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200.png?text=No+Image";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 40;

/// Configuration for recipes, stored as config.json next to the recipe data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipesConfig {
    /// Image shown for recipes without a usable image URL
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Width the card list is laid out to
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// The keys `recipes config` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    PlaceholderImage,
    LineWidth,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::PlaceholderImage, ConfigKey::LineWidth];

    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::PlaceholderImage => "placeholder-image",
            ConfigKey::LineWidth => "line-width",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| format!("Unknown config key: {}", s))
    }
}

impl RecipesConfig {
    /// Reads `config.json` from `dir`. A missing file means defaults.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match fs::read_to_string(dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(RecipeError::Io(e)),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        fs::write(dir.join(CONFIG_FILENAME), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::PlaceholderImage => self.placeholder_image.clone(),
            ConfigKey::LineWidth => self.line_width.to_string(),
        }
    }

    /// Validates `value` for `key` and stores it; on error nothing changes.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            ConfigKey::PlaceholderImage if value.is_empty() => {
                Err("placeholder-image cannot be empty".to_string())
            }
            ConfigKey::PlaceholderImage => {
                self.placeholder_image = value.to_string();
                Ok(())
            }
            ConfigKey::LineWidth => match value.parse::<usize>() {
                Ok(width) if width >= MIN_LINE_WIDTH => {
                    self.line_width = width;
                    Ok(())
                }
                Ok(_) => Err(format!("line-width must be at least {}", MIN_LINE_WIDTH)),
                Err(_) => Err(format!("Invalid line-width: {}", value)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RecipesConfig::default();
        assert_eq!(config.line_width, 100);
        assert!(config.placeholder_image.contains("No+Image"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = RecipesConfig::load(temp.path().join("absent")).unwrap();
        assert_eq!(config, RecipesConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = RecipesConfig::default();
        config.set(ConfigKey::LineWidth, "72").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = RecipesConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.line_width, 72);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"line_width": 80}"#).unwrap();

        let loaded = RecipesConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.line_width, 80);
        assert_eq!(loaded.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = RecipesConfig::default();
        assert!(config.set(ConfigKey::LineWidth, "wide").is_err());
        assert!(config.set(ConfigKey::LineWidth, "10").is_err());
        assert!(config.set(ConfigKey::PlaceholderImage, "  ").is_err());
        assert_eq!(config, RecipesConfig::default());
    }

    #[test]
    fn test_key_names_parse_back() {
        for key in ConfigKey::ALL {
            assert_eq!(key.name().parse::<ConfigKey>(), Ok(key));
        }
        assert!("colour".parse::<ConfigKey>().is_err());
        assert_eq!(RecipesConfig::default().get(ConfigKey::LineWidth), "100");
    }
}
