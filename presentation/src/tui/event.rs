//! TUI event types
//!
//! Defines the commands sent TO the controller task. Events coming FROM
//! it arrive as [`UiEvent`](gemchat_application::UiEvent) on the UI
//! channel.

/// Commands sent from the TUI event loop to the controller task (Actor inbox)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    /// User submitted a message from Insert mode
    ProcessRequest(String),
    /// User issued a command from Command mode (e.g. "clear", "help", "q")
    HandleCommand(String),
    /// Ask for a fresh stats snapshot (driven by the render tick)
    RefreshStats,
    /// Graceful shutdown
    Quit,
}
