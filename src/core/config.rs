use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CurrencyApiProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub currency_api: Option<CurrencyApiProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            currency_api: Some(CurrencyApiProviderConfig {
                base_url: "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest"
                    .to_string(),
            }),
        }
    }
}

/// Form values used when no preference has been persisted yet.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DefaultsConfig {
    pub from: String,
    pub to: String,
    pub amount: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            from: "USD".to_string(),
            to: "EUR".to_string(),
            amount: "1".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Prefix converted amounts with a currency symbol when the code
    /// has a known symbol.
    #[serde(default)]
    pub symbols: bool,
    /// Persist last-used selections to the local store.
    #[serde(default = "default_preferences")]
    pub preferences: bool,
    pub data_path: Option<String>,
}

fn default_preferences() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            defaults: DefaultsConfig::default(),
            symbols: false,
            preferences: true,
            data_path: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location. A missing file is
    /// not an error: the converter works out of the box on defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "xrate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("in", "codito", "xrate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        self.providers
            .currency_api
            .as_ref()
            .map_or("https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest", |p| {
                &p.base_url
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  currency_api:
    base_url: "http://example.com/rates"
defaults:
  from: "EUR"
  to: "JPY"
  amount: "10"
symbols: true
preferences: false
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.base_url(), "http://example.com/rates");
        assert_eq!(config.defaults.from, "EUR");
        assert_eq!(config.defaults.to, "JPY");
        assert_eq!(config.defaults.amount, "10");
        assert!(config.symbols);
        assert!(!config.preferences);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(
            config.base_url(),
            "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest"
        );
        assert_eq!(config.defaults.from, "USD");
        assert_eq!(config.defaults.to, "EUR");
        assert_eq!(config.defaults.amount, "1");
        assert!(!config.symbols);
        assert!(config.preferences);
    }

    #[test]
    fn test_custom_data_path() {
        let yaml_str = r#"
data_path: "/tmp/xrate-data"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(
            config.default_data_path().unwrap(),
            PathBuf::from("/tmp/xrate-data")
        );
    }
}
