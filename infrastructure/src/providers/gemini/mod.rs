//! Gemini provider adapter
//!
//! Implements [`ChatGateway`](gemchat_application::ChatGateway) against the
//! `generateContent` REST endpoint.

mod adapter;
mod types;

pub use adapter::{GeminiConfig, GeminiGateway};
