//! UI event types emitted by ChatController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. The presentation layer receives them over a channel
//! and applies them to its render state.

use gemchat_domain::Model;

/// Events emitted by ChatController for the presentation layer to render
#[derive(Debug, Clone)]
pub enum UiEvent {
    // === Welcome & Info ===
    /// Display welcome screen with current configuration
    Welcome(WelcomeInfo),
    /// Display help text for all available commands
    Help,
    /// Display current configuration snapshot
    ConfigDisplay(String),

    // === Conversation ===
    /// The model answered the most recent user message
    AssistantMessage(String),
    /// The send failed; the user message stays recorded with no answer
    SendFailed {
        /// User-facing notice ("Too many requests! …" or "Error: …")
        notice: String,
        rate_limited: bool,
    },
    /// Conversation history cleared
    HistoryCleared,

    // === Stats ===
    /// Session counters for the sidebar
    Stats(SessionStats),

    // === Errors & Control ===
    /// Unknown command entered
    UnknownCommand { command: String },
    /// Exit message
    Exit,
}

/// Information for rendering the welcome screen
#[derive(Debug, Clone)]
pub struct WelcomeInfo {
    pub model: Model,
}

/// Snapshot of session counters for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// User messages sent this session (attempts, not successes)
    pub message_count: usize,
    /// Messages in the history, both roles
    pub turn_count: usize,
    /// Whole seconds since session start
    pub elapsed_seconds: u64,
}
