//! Domain layer for gemchat
//!
//! This crate contains the core entities and value objects for a single
//! chat conversation. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - [`ChatSession`] — the in-memory aggregate for one user's chat
//!   lifetime: ordered message history, a sent-message counter, and the
//!   session start time.
//! - [`Message`] / [`Role`] — one conversation turn, tagged with the
//!   side that produced it.
//! - [`Model`] — which remote Gemini model answers the session.

pub mod core;
pub mod session;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, prompt::Prompt};
pub use session::entities::{ChatSession, Message, Role};
