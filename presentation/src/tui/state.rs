//! TUI application state
//!
//! Single source of truth for everything the TUI renders.
//! Updated by key handling in the main loop and by TuiPresenter
//! (UiEvent → state).

use super::mode::InputMode;
use gemchat_application::SessionStats;
use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Role tag for a rendered conversation row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRole {
    User,
    Assistant,
    /// Command feedback and notices
    System,
    /// Failed sends
    Error,
}

impl DisplayRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "AI",
            Self::System => "*",
            Self::Error => "Error",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::User => Color::Cyan,
            Self::Assistant => Color::Green,
            Self::System => Color::DarkGray,
            Self::Error => Color::Red,
        }
    }
}

/// One rendered row of the conversation pane
#[derive(Debug, Clone)]
pub struct DisplayMessage {
    pub role: DisplayRole,
    pub content: String,
}

impl DisplayMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: DisplayRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: DisplayRole::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: DisplayRole::System,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: DisplayRole::Error,
            content: content.into(),
        }
    }
}

/// Frames for the "thinking" spinner
const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Central TUI state — owned by the TuiApp select! loop
pub struct TuiState {
    // -- Mode --
    pub mode: InputMode,

    // -- Message input buffer --
    pub input: String,
    pub cursor_pos: usize,

    // -- Command buffer (for : mode) --
    pub command_input: String,
    pub command_cursor: usize,

    // -- Conversation display --
    pub messages: Vec<DisplayMessage>,
    /// Lines scrolled up from the bottom (0 = stick to bottom)
    pub scroll_offset: usize,

    // -- In-flight send --
    pub waiting: bool,
    spinner_frame: usize,

    // -- Sidebar --
    pub stats: SessionStats,
    pub model_name: String,
    pub model_label: String,

    // -- Overlay --
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            input: String::new(),
            cursor_pos: 0,
            command_input: String::new(),
            command_cursor: 0,
            messages: Vec::new(),
            scroll_offset: 0,
            waiting: false,
            spinner_frame: 0,
            stats: SessionStats::default(),
            model_name: String::new(),
            model_label: String::new(),
            show_help: false,
            flash_message: None,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.active_cursor();
        self.active_input_mut().insert(cursor, c);
        *self.active_cursor_mut() += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input_mut();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            input.remove(cursor - prev_char_len);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.active_cursor();
        let input = self.active_input();
        if cursor < input.len() {
            let next_char_len = input[cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        *self.active_cursor_mut() = 0;
    }

    pub fn cursor_end(&mut self) {
        let len = self.active_input().len();
        *self.active_cursor_mut() = len;
    }

    /// Take the message buffer contents and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Take the command buffer contents and clear it
    pub fn take_command(&mut self) -> String {
        self.command_cursor = 0;
        std::mem::take(&mut self.command_input)
    }

    fn active_input(&self) -> &String {
        match self.mode {
            InputMode::Command => &self.command_input,
            _ => &self.input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.mode {
            InputMode::Command => &mut self.command_input,
            _ => &mut self.input,
        }
    }

    fn active_cursor(&self) -> usize {
        match self.mode {
            InputMode::Command => self.command_cursor,
            _ => self.cursor_pos,
        }
    }

    fn active_cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            InputMode::Command => &mut self.command_cursor,
            _ => &mut self.cursor_pos,
        }
    }

    // -- Conversation --

    /// Append a row and snap the view back to the bottom
    pub fn push_message(&mut self, message: DisplayMessage) {
        self.messages.push(message);
        self.scroll_to_bottom();
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
        self.scroll_offset = 0;
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = usize::MAX;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    pub fn expire_flash(&mut self, ttl: Duration) {
        if let Some((_, since)) = self.flash_message {
            if since.elapsed() >= ttl {
                self.flash_message = None;
            }
        }
    }

    // -- Tick --

    /// Advance animation state; called on every tick
    pub fn on_tick(&mut self) {
        if self.waiting {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Format elapsed seconds as "3m 42s"
    pub fn elapsed_label(&self) -> String {
        let s = self.stats.elapsed_seconds;
        format!("{}m {}s", s / 60, s % 60)
    }
}
