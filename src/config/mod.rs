use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// "dark" or "light"
    pub mode: String,

    /// Optional accent override as a hex color ("#FFC107")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
            accent: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneratorSettings {
    /// OpenAPI document URL the client is generated from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Directory the generated client is written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Base URL for the generated client (BASE_URL wins over this)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Generator plugins to run, in order
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeSettings,
    pub generator: GeneratorSettings,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("fyf");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        let config = AppConfig::default();
        let _ = config.save();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            theme: ThemeSettings {
                mode: "light".to_string(),
                accent: Some("#FFC107".to_string()),
            },
            generator: GeneratorSettings {
                input: Some("http://localhost:8000/openapi.json".to_string()),
                output: Some(PathBuf::from("src/client")),
                base_url: Some("https://api.example.com".to_string()),
                plugins: vec!["progenitor".to_string()],
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.theme.accent, deserialized.theme.accent);
        assert_eq!(config.generator.input, deserialized.generator.input);
        assert_eq!(config.generator.plugins, deserialized.generator.plugins);
    }

    #[test]
    fn missing_tables_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.theme.mode, "dark");
        assert!(config.generator.input.is_none());
        assert!(config.generator.plugins.is_empty());
    }
}
