//! Session domain entities

use crate::core::model::Model;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One user's chat session (Entity)
///
/// Holds the ordered message history, the sent-message counter, and the
/// session start time. The counter tracks send *attempts*: it is bumped
/// when the user message is recorded, before the remote call, so a failed
/// call still counts and leaves its user message in the history with no
/// answer below it.
///
/// The start time is a monotonic [`Instant`], so [`elapsed_seconds`]
/// never decreases within a session and restarts only on [`reset`].
///
/// [`elapsed_seconds`]: ChatSession::elapsed_seconds
/// [`reset`]: ChatSession::reset
#[derive(Debug, Clone)]
pub struct ChatSession {
    model: Model,
    messages: Vec<Message>,
    message_count: usize,
    started_at: Instant,
}

impl ChatSession {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            messages: Vec::new(),
            message_count: 0,
            started_at: Instant::now(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of user messages sent this session (attempts, not successes)
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// Total number of messages in the history, both roles
    pub fn turn_count(&self) -> usize {
        self.messages.len()
    }

    /// Record a user message: bump the counter, then append
    pub fn push_user_message(&mut self, content: impl Into<String>) {
        self.message_count += 1;
        self.messages.push(Message::user(content));
    }

    /// Record the model's reply to the most recent user message
    pub fn push_assistant_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Clear the history, zero the counter, and restart the session clock
    pub fn reset(&mut self) {
        self.messages.clear();
        self.message_count = 0;
        self.started_at = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Whole seconds since session start (or last reset)
    pub fn elapsed_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ChatSession {
        ChatSession::new(Model::default())
    }

    #[test]
    fn test_new_session_is_empty() {
        let s = session();
        assert!(s.is_empty());
        assert_eq!(s.message_count(), 0);
        assert_eq!(s.turn_count(), 0);
    }

    #[test]
    fn test_push_user_message_counts_attempt() {
        let mut s = session();
        s.push_user_message("hello");
        assert_eq!(s.message_count(), 1);
        assert_eq!(s.turn_count(), 1);
        assert_eq!(s.messages()[0], Message::user("hello"));
    }

    #[test]
    fn test_reply_does_not_bump_counter() {
        let mut s = session();
        s.push_user_message("hello");
        s.push_assistant_message("hi there");
        assert_eq!(s.message_count(), 1);
        assert_eq!(s.turn_count(), 2);
        assert_eq!(s.messages()[1].role, Role::Assistant);
    }

    #[test]
    fn test_alternating_history() {
        let mut s = session();
        for i in 0..3 {
            s.push_user_message(format!("question {i}"));
            s.push_assistant_message(format!("answer {i}"));
        }
        assert_eq!(s.message_count(), 3);
        assert_eq!(s.turn_count(), 6);
        for (i, msg) in s.messages().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(msg.role, expected);
        }
    }

    #[test]
    fn test_unanswered_message_stays_recorded() {
        // A failed send appends the user message and nothing else
        let mut s = session();
        s.push_user_message("question");
        s.push_assistant_message("answer");
        s.push_user_message("unanswered");
        assert_eq!(s.message_count(), 2);
        assert_eq!(s.turn_count(), 3);
        assert_eq!(s.messages().last().unwrap().role, Role::User);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut s = session();
        s.push_user_message("hello");
        s.push_assistant_message("hi");
        s.reset();
        assert!(s.is_empty());
        assert_eq!(s.message_count(), 0);
        assert_eq!(s.elapsed_seconds(), 0);
    }

    #[test]
    fn test_elapsed_is_monotone() {
        let s = session();
        let a = s.elapsed();
        let b = s.elapsed();
        assert!(b >= a);
        assert_eq!(s.elapsed_seconds(), 0);
    }

    #[test]
    fn test_model_accessor() {
        let s = ChatSession::new(Model::Gemini15Pro);
        assert_eq!(s.model(), &Model::Gemini15Pro);
    }
}
