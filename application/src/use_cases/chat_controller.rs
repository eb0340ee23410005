//! Chat Controller
//!
//! Owns the one [`ChatSession`] for this process and mediates every
//! mutation to it. Runs inside a background task with an mpsc inbox, so
//! requests and commands are processed strictly in arrival order — at most
//! one remote call is in flight at a time, with no locks involved.
//! Emits [`UiEvent`] messages to a channel for the presentation layer to
//! render.

use crate::ports::chat_gateway::ChatGateway;
use crate::ports::ui_event::{SessionStats, UiEvent, WelcomeInfo};
use crate::use_cases::send_message::{SendMessageError, SendMessageUseCase};
use gemchat_domain::{ChatSession, Model};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Notice shown when the provider reports a rate/quota condition
const RATE_LIMIT_NOTICE: &str = "Too many requests! Please wait and try again.";

/// Result of handling a command
pub enum CommandAction {
    /// Continue the event loop
    Continue,
    /// Exit the application
    Exit,
}

/// Controller managing the conversation session
///
/// This controller lives in the application layer and handles:
/// - Relaying user messages through [`SendMessageUseCase`]
/// - Command processing (`clear`, `help`, `config`, `quit`)
/// - Emitting UiEvents to a channel for the presentation layer
pub struct ChatController<G: ChatGateway + 'static> {
    use_case: SendMessageUseCase<G>,
    session: ChatSession,
    /// Channel sender for UI events
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl<G: ChatGateway + 'static> ChatController<G> {
    /// Create a new ChatController with a fresh session
    pub fn new(gateway: Arc<G>, model: Model, tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            use_case: SendMessageUseCase::new(gateway),
            session: ChatSession::new(model),
            tx,
        }
    }

    /// Emit the welcome event and the initial stats
    pub fn send_welcome(&self) {
        self.emit(UiEvent::Welcome(WelcomeInfo {
            model: self.session.model().clone(),
        }));
        self.emit_stats();
    }

    /// Current session counters
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            message_count: self.session.message_count(),
            turn_count: self.session.turn_count(),
            elapsed_seconds: self.session.elapsed_seconds(),
        }
    }

    /// Emit a fresh stats snapshot (also driven by the view's tick)
    pub fn emit_stats(&self) {
        self.emit(UiEvent::Stats(self.stats()));
    }

    /// Relay one user message to the model and report the outcome
    pub async fn process_request(&mut self, text: &str) {
        debug!("Processing request ({} bytes)", text.len());

        match self.use_case.execute(&mut self.session, text).await {
            Ok(reply) => self.emit(UiEvent::AssistantMessage(reply)),
            Err(err) => self.emit(UiEvent::SendFailed {
                notice: Self::failure_notice(&err),
                rate_limited: err.is_rate_limited(),
            }),
        }
        self.emit_stats();
    }

    /// Handle a command (already stripped of its `:` prefix)
    pub fn handle_command(&mut self, command: &str) -> CommandAction {
        match command.trim() {
            "q" | "quit" | "exit" => {
                self.emit(UiEvent::Exit);
                CommandAction::Exit
            }
            "clear" | "new" => {
                self.session.reset();
                info!("Conversation history cleared");
                self.emit(UiEvent::HistoryCleared);
                self.emit_stats();
                CommandAction::Continue
            }
            "help" | "?" => {
                self.emit(UiEvent::Help);
                CommandAction::Continue
            }
            "config" | "info" => {
                self.emit(UiEvent::ConfigDisplay(format!(
                    "model: {} | messages: {} | turns: {}",
                    self.session.model(),
                    self.session.message_count(),
                    self.session.turn_count(),
                )));
                CommandAction::Continue
            }
            other => {
                self.emit(UiEvent::UnknownCommand {
                    command: other.to_string(),
                });
                CommandAction::Continue
            }
        }
    }

    fn failure_notice(err: &SendMessageError) -> String {
        if err.is_rate_limited() {
            RATE_LIMIT_NOTICE.to_string()
        } else {
            format!("Error: {}", err)
        }
    }

    fn emit(&self, event: UiEvent) {
        // The receiver closing means the UI is gone; nothing left to do
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_gateway::GatewayError;
    use async_trait::async_trait;
    use gemchat_domain::Message;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    }

    #[async_trait]
    impl ChatGateway for MockGateway {
        async fn continue_conversation(
            &self,
            _model: &Model,
            _history: &[Message],
        ) -> Result<String, GatewayError> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Request("no more replies".into())))
        }
    }

    fn controller(
        replies: Vec<Result<String, GatewayError>>,
    ) -> (
        ChatController<MockGateway>,
        mpsc::UnboundedReceiver<UiEvent>,
    ) {
        let gateway = Arc::new(MockGateway {
            replies: Mutex::new(VecDeque::from(replies)),
        });
        let (tx, rx) = mpsc::unbounded_channel();
        (ChatController::new(gateway, Model::default(), tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        events
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_welcome_emits_model_and_stats() {
        let (ctrl, mut rx) = controller(vec![]);
        ctrl.send_welcome();

        let events = drain(&mut rx);
        assert!(matches!(&events[0], UiEvent::Welcome(info) if info.model == Model::default()));
        assert!(matches!(
            &events[1],
            UiEvent::Stats(s) if s.message_count == 0 && s.turn_count == 0
        ));
    }

    #[tokio::test]
    async fn test_successful_request_emits_reply_then_stats() {
        let (mut ctrl, mut rx) = controller(vec![Ok("Hello!".into())]);
        ctrl.process_request("hi").await;

        let events = drain(&mut rx);
        assert!(matches!(&events[0], UiEvent::AssistantMessage(t) if t == "Hello!"));
        assert!(matches!(
            &events[1],
            UiEvent::Stats(s) if s.message_count == 1 && s.turn_count == 2
        ));
    }

    #[tokio::test]
    async fn test_rate_limited_request_emits_notice() {
        let (mut ctrl, mut rx) = controller(vec![Err(GatewayError::RateLimited)]);
        ctrl.process_request("hello").await;

        let events = drain(&mut rx);
        match &events[0] {
            UiEvent::SendFailed {
                notice,
                rate_limited,
            } => {
                assert_eq!(notice, RATE_LIMIT_NOTICE);
                assert!(rate_limited);
            }
            other => panic!("Expected SendFailed, got {other:?}"),
        }
        // The attempt still counted; the user turn is unanswered
        assert!(matches!(
            &events[1],
            UiEvent::Stats(s) if s.message_count == 1 && s.turn_count == 1
        ));
    }

    #[tokio::test]
    async fn test_other_failure_carries_message_text() {
        let (mut ctrl, mut rx) =
            controller(vec![Err(GatewayError::Response("bad gateway".into()))]);
        ctrl.process_request("hello").await;

        let events = drain(&mut rx);
        match &events[0] {
            UiEvent::SendFailed {
                notice,
                rate_limited,
            } => {
                assert!(notice.starts_with("Error: "));
                assert!(notice.contains("bad gateway"));
                assert!(!rate_limited);
            }
            other => panic!("Expected SendFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_clear_resets_session() {
        let (mut ctrl, mut rx) = controller(vec![Ok("reply".into())]);
        ctrl.process_request("hi").await;
        drain(&mut rx);

        assert!(matches!(
            ctrl.handle_command("clear"),
            CommandAction::Continue
        ));

        let events = drain(&mut rx);
        assert!(matches!(&events[0], UiEvent::HistoryCleared));
        assert!(matches!(
            &events[1],
            UiEvent::Stats(s) if s.message_count == 0 && s.turn_count == 0 && s.elapsed_seconds == 0
        ));
    }

    #[tokio::test]
    async fn test_quit_commands_exit() {
        let (mut ctrl, mut rx) = controller(vec![]);
        for cmd in ["q", "quit", "exit"] {
            assert!(matches!(ctrl.handle_command(cmd), CommandAction::Exit));
        }
        let events = drain(&mut rx);
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| matches!(e, UiEvent::Exit)));
    }

    #[tokio::test]
    async fn test_unknown_command_reported() {
        let (mut ctrl, mut rx) = controller(vec![]);
        ctrl.handle_command("frobnicate");

        let events = drain(&mut rx);
        assert!(matches!(
            &events[0],
            UiEvent::UnknownCommand { command } if command == "frobnicate"
        ));
    }
}
