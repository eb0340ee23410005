//! Presentation layer for gemchat
//!
//! This crate contains the CLI definition and the terminal chat interface.

pub mod cli;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use tui::TuiApp;
