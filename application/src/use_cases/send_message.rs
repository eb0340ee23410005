//! Send Message use case.
//!
//! Implements one conversation turn: record the user message, relay the
//! full history to the remote model, record the reply.
//!
//! The message counter is bumped when the user message is recorded, before
//! the remote call — it counts attempts, not successes. A failed call
//! therefore leaves the user message in the history with no answer, which
//! is exactly what the user saw happen.

use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use gemchat_domain::{ChatSession, DomainError, Prompt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while sending a message.
#[derive(Error, Debug)]
pub enum SendMessageError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl SendMessageError {
    /// Check if this failure was a rate/quota condition
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SendMessageError::Gateway(e) if e.is_rate_limited())
    }
}

/// Use case for sending one user message and receiving the reply.
///
/// Flow:
/// 1. Validate the input (empty input is rejected before any mutation)
/// 2. Bump the counter and append the user message
/// 3. Call the gateway with the full history
/// 4. On success, append and return the reply; on failure, return the
///    classified error with the user message left recorded
pub struct SendMessageUseCase<G: ChatGateway> {
    gateway: Arc<G>,
}

impl<G: ChatGateway> Clone for SendMessageUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl<G: ChatGateway> SendMessageUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute one send against the given session.
    pub async fn execute(
        &self,
        session: &mut ChatSession,
        text: &str,
    ) -> Result<String, SendMessageError> {
        let prompt = Prompt::new(text)?;

        session.push_user_message(prompt.into_content());
        debug!(
            message_count = session.message_count(),
            "User message recorded"
        );

        let reply = match self
            .gateway
            .continue_conversation(session.model(), session.messages())
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Send failed: {}", e);
                return Err(e.into());
            }
        };

        session.push_assistant_message(reply.clone());
        info!(turns = session.turn_count(), "Reply recorded");
        Ok(reply)
    }
}
