//! TUI mode system (vim-like mode switching)
//!
//! Defines the mode-based interaction model:
//! - Normal mode: navigation and single-key commands
//! - Insert mode: composing a message
//! - Command mode: `:` commands (clear, help, quit)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// Application input mode (vim-like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and commands
    #[default]
    Normal,
    /// Insert mode - text input
    Insert,
    /// Command mode - execute commands (like `:` in vim)
    Command,
}

impl InputMode {
    /// Get the mode indicator string for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }

    /// Get the mode color for the status line
    pub fn color(&self) -> Color {
        match self {
            Self::Normal => Color::Blue,
            Self::Insert => Color::Green,
            Self::Command => Color::Yellow,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    // Mode transitions
    EnterInsert,
    EnterCommand,
    ExitToNormal,

    // Text editing
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Submit
    SubmitInput,
    SubmitCommand,

    // Scrolling
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,

    // Application
    ClearChat,
    ShowHelp,
    Quit,
    None,
}

/// Map a key event to a semantic action based on the current mode
pub fn handle_key_event(mode: InputMode, key: KeyEvent) -> KeyAction {
    // Ctrl+C quits from any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match mode {
        InputMode::Normal => handle_normal(key),
        InputMode::Insert => handle_insert(key),
        InputMode::Command => handle_command(key),
    }
}

fn handle_normal(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Mode switches
        (KeyCode::Char('i'), KeyModifiers::NONE) | (KeyCode::Char('a'), KeyModifiers::NONE) => {
            KeyAction::EnterInsert
        }
        (KeyCode::Char(':'), _) => KeyAction::EnterCommand,

        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,

        // Navigation
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => KeyAction::ScrollUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => KeyAction::ScrollDown,
        (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::ScrollToTop,
        (KeyCode::Char('G'), _) => KeyAction::ScrollToBottom,

        // Chat
        (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::ClearChat,

        // Help
        (KeyCode::Char('?'), _) => KeyAction::ShowHelp,

        _ => KeyAction::None,
    }
}

fn handle_insert(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::ExitToNormal,
        KeyCode::Enter => KeyAction::SubmitInput,
        KeyCode::Char(c) => KeyAction::InsertChar(c),
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        _ => KeyAction::None,
    }
}

fn handle_command(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::ExitToNormal,
        KeyCode::Enter => KeyAction::SubmitCommand,
        KeyCode::Char(c) => KeyAction::InsertChar(c),
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(InputMode::Normal.indicator(), "NORMAL");
        assert_eq!(InputMode::Insert.indicator(), "INSERT");
        assert_eq!(InputMode::Command.indicator(), "COMMAND");
    }

    #[test]
    fn test_normal_mode_key_handling() {
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('i'))),
            KeyAction::EnterInsert
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('a'))),
            KeyAction::EnterInsert
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char(':'))),
            KeyAction::EnterCommand
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('c'))),
            KeyAction::ClearChat
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('?'))),
            KeyAction::ShowHelp
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_normal_mode_scrolling() {
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('k'))),
            KeyAction::ScrollUp
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Up)),
            KeyAction::ScrollUp
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('j'))),
            KeyAction::ScrollDown
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('g'))),
            KeyAction::ScrollToTop
        );
        assert_eq!(
            handle_key_event(
                InputMode::Normal,
                KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)
            ),
            KeyAction::ScrollToBottom
        );
    }

    #[test]
    fn test_insert_mode_key_handling() {
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Esc)),
            KeyAction::ExitToNormal
        );
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Enter)),
            KeyAction::SubmitInput
        );
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Char('Z'))),
            KeyAction::InsertChar('Z')
        );
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Backspace)),
            KeyAction::DeleteChar
        );
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Home)),
            KeyAction::CursorHome
        );
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::F(1))),
            KeyAction::None
        );
    }

    #[test]
    fn test_command_mode_key_handling() {
        assert_eq!(
            handle_key_event(InputMode::Command, key(KeyCode::Enter)),
            KeyAction::SubmitCommand
        );
        assert_eq!(
            handle_key_event(InputMode::Command, key(KeyCode::Esc)),
            KeyAction::ExitToNormal
        );
        assert_eq!(
            handle_key_event(InputMode::Command, key(KeyCode::Char('h'))),
            KeyAction::InsertChar('h')
        );
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Normal, InputMode::Insert, InputMode::Command] {
            assert_eq!(handle_key_event(mode, ctrl_c), KeyAction::Quit);
        }
    }
}
