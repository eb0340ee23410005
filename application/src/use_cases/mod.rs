//! Use cases — application-level operations over the domain.

pub mod chat_controller;
pub mod send_message;
