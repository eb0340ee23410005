//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error(
        "No API key configured. Set the GEMINI_API_KEY environment variable \
         or the provider.api_key config value."
    )]
    MissingApiKey,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GEMCHAT_*` environment variables (e.g. `GEMCHAT_PROVIDER__MODEL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./gemchat.toml` or `./.gemchat.toml`
    /// 4. Global: `<config dir>/gemchat/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["gemchat.toml", ".gemchat.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("GEMCHAT_").split("__"));

        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gemchat").join("config.toml"))
    }

    /// Resolve the API credential for the provider
    ///
    /// `GEMINI_API_KEY` wins over `GOOGLE_API_KEY`, which wins over the
    /// config file value. Absence is fatal at start-up.
    pub fn resolve_api_key(config: &FileConfig) -> Result<String, ConfigError> {
        for var in ["GEMINI_API_KEY", "GOOGLE_API_KEY"] {
            if let Ok(key) = std::env::var(var) {
                if !key.trim().is_empty() {
                    return Ok(key);
                }
            }
        }
        config
            .provider
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.model.to_string(), "gemini-1.5-flash");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if the file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("gemchat"));
    }

    #[test]
    fn test_explicit_path_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[provider]\nmodel = \"gemini-2.0-flash\"\ntimeout_secs = 30"
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.provider.model.to_string(), "gemini-2.0-flash");
        assert_eq!(config.provider.timeout_secs, 30);
        // Untouched keys keep their defaults
        assert_eq!(config.provider.connect_timeout_secs, 10);
    }

    #[test]
    fn test_api_key_from_config_value() {
        let mut config = FileConfig::default();
        config.provider.api_key = Some("file-key".to_string());
        // Environment variables win when present; in a clean environment
        // the config value is used.
        if std::env::var("GEMINI_API_KEY").is_err() && std::env::var("GOOGLE_API_KEY").is_err() {
            let key = ConfigLoader::resolve_api_key(&config).unwrap();
            assert_eq!(key, "file-key");
        }
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        if std::env::var("GEMINI_API_KEY").is_err() && std::env::var("GOOGLE_API_KEY").is_err() {
            let err = ConfigLoader::resolve_api_key(&FileConfig::default()).unwrap_err();
            assert!(matches!(err, ConfigError::MissingApiKey));
        }
    }
}
