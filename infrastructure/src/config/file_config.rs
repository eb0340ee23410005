//! Configuration file schema
//!
//! Maps `gemchat.toml` / `config.toml` onto typed sections. Every field
//! has a default so a missing file (or any missing key) is fine; only the
//! API credential is mandatory, and that is enforced by the loader.

use gemchat_domain::Model;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: ProviderConfig,
    pub tui: TuiConfig,
}

/// `[provider]` section — the remote model endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API credential. Normally left unset here and supplied via the
    /// `GEMINI_API_KEY` environment variable instead.
    pub api_key: Option<String>,
    pub model: Model,
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    /// Cap on reply length, forwarded as `maxOutputTokens` when set
    pub max_output_tokens: Option<u32>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Model::default(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            connect_timeout_secs: 10,
            timeout_secs: 120,
            max_output_tokens: None,
        }
    }
}

/// `[tui]` section — terminal UI tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick in milliseconds (drives the timer and spinner)
    pub tick_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_ms: 250 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.provider.model, Model::Gemini15Flash);
        assert!(config.provider.api_key.is_none());
        assert!(
            config
                .provider
                .base_url
                .starts_with("https://generativelanguage")
        );
        assert_eq!(config.tui.tick_ms, 250);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [provider]
            model = "gemini-1.5-pro"
            "#,
        )
        .unwrap();
        assert_eq!(config.provider.model, Model::Gemini15Pro);
        assert_eq!(config.provider.timeout_secs, 120);
        assert_eq!(config.tui.tick_ms, 250);
    }
}
