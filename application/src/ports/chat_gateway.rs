//! Chat Gateway port
//!
//! Defines the interface for communicating with the remote model provider.

use async_trait::async_trait;
use gemchat_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// Classification happens once, in the adapter, where the provider's raw
/// status is available. Nothing downstream inspects message text.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Rate limited by the provider")]
    RateLimited,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    Response(String),
}

impl GatewayError {
    /// Check if this error represents a rate/quota condition
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GatewayError::RateLimited)
    }
}

/// Gateway for conversation with the remote model
///
/// The remote side is stateless per call from this program's perspective:
/// the entire prior history, including the just-appended user message, is
/// passed on every call. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send the full history and get the next assistant reply text
    async fn continue_conversation(
        &self,
        model: &Model,
        history: &[Message],
    ) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_check() {
        assert!(GatewayError::RateLimited.is_rate_limited());
        assert!(!GatewayError::Request("boom".into()).is_rate_limited());
        assert!(!GatewayError::Response("bad json".into()).is_rate_limited());
    }
}
