use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default Gemini API base URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Gemini API key; also read from GEMINI_API_KEY
    pub key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// BCP-47 language code used for speech synthesis
    pub language: String,
    /// Dark theme flag for terminal rendering
    pub dark_theme: bool,
    /// Read bot replies aloud when a synthesizer is available
    pub speak_replies: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            key: None,
            base_url: None,
            model: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            language: "en".to_string(),
            dark_theme: false,
            speak_replies: false,
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".healthbuddy").join("config.toml"))
    }

    /// Resolve the API key from config or environment
    pub fn api_key(&self) -> Option<String> {
        self.api
            .key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
    }

    /// Get the API base URL
    pub fn api_base(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        self.api.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Set the API key
    pub fn set_api_key(&mut self, key: String) {
        self.api.key = Some(key);
    }

    /// Get configured coordinates, if both are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Toggle the dark theme flag, returning the new value
    pub fn toggle_theme(&mut self) -> bool {
        self.ui.dark_theme = !self.ui.dark_theme;
        self.ui.dark_theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api.key.is_none());
        assert_eq!(config.ui.language, "en");
        assert!(!config.ui.dark_theme);
        assert!(config.coordinates().is_none());
    }

    #[test]
    fn test_api_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_set_api_key() {
        let mut config = Config::default();
        config.set_api_key("test-key".to_string());
        assert_eq!(config.api.key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_coordinates_require_both() {
        let mut config = Config::default();
        config.location.latitude = Some(40.7128);
        assert!(config.coordinates().is_none());

        config.location.longitude = Some(-74.0060);
        assert_eq!(config.coordinates(), Some((40.7128, -74.0060)));
    }

    #[test]
    fn test_toggle_theme() {
        let mut config = Config::default();
        assert!(config.toggle_theme());
        assert!(!config.toggle_theme());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.set_api_key("abc123".to_string());
        config.ui.language = "hi".to_string();

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("abc123"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized.api.key.as_deref(), Some("abc123"));
        assert_eq!(deserialized.ui.language, "hi");
    }
}
