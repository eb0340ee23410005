//! Application layer for gemchat
//!
//! Use cases and ports. The [`ChatGateway`] port is the outbound boundary
//! to the remote model; [`UiEvent`] is the inbound boundary the
//! presentation layer renders from. [`ChatController`] sits between the
//! two and owns the session state.

pub mod ports;
pub mod use_cases;

pub use ports::chat_gateway::{ChatGateway, GatewayError};
pub use ports::ui_event::{SessionStats, UiEvent, WelcomeInfo};
pub use use_cases::chat_controller::{ChatController, CommandAction};
pub use use_cases::send_message::{SendMessageError, SendMessageUseCase};
