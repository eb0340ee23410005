//! Infrastructure layer for gemchat
//!
//! Adapters for the outside world: the Gemini HTTP gateway and the
//! file/environment configuration loader.

pub mod config;
pub mod providers;

pub use config::file_config::{FileConfig, ProviderConfig, TuiConfig};
pub use config::loader::{ConfigError, ConfigLoader};
pub use providers::gemini::{GeminiConfig, GeminiGateway};
