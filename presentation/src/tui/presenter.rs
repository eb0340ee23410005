//! TUI presenter — applies UiEvents from the controller to render state.

use super::state::{DisplayMessage, TuiState};
use gemchat_application::UiEvent;

/// Applies controller output to the TUI state
pub struct TuiPresenter;

impl TuiPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, state: &mut TuiState, event: &UiEvent) {
        match event {
            UiEvent::Welcome(info) => {
                state.model_name = info.model.to_string();
                state.model_label = info.model.display_label().to_string();
            }
            UiEvent::Help => {
                state.show_help = true;
            }
            UiEvent::ConfigDisplay(text) => {
                state.set_flash(text.clone());
            }
            UiEvent::AssistantMessage(text) => {
                state.waiting = false;
                state.push_message(DisplayMessage::assistant(text));
            }
            UiEvent::SendFailed { notice, .. } => {
                // The user row above stays — visibly unanswered
                state.waiting = false;
                state.push_message(DisplayMessage::error(notice));
            }
            UiEvent::HistoryCleared => {
                state.clear_messages();
                state.set_flash("Chat cleared");
            }
            UiEvent::Stats(stats) => {
                state.stats = *stats;
            }
            UiEvent::UnknownCommand { command } => {
                state.set_flash(format!("Unknown command: {command}"));
            }
            UiEvent::Exit => {
                state.should_quit = true;
            }
        }
    }
}

impl Default for TuiPresenter {
    fn default() -> Self {
        Self::new()
    }
}
