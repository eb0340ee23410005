//! Chat session domain.
//!
//! - [`entities::ChatSession`] — one user's conversation with the model
//! - [`entities::Message`] — a single message within a session

pub mod entities;
