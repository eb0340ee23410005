//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message is empty")]
    EmptyPrompt,

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_display() {
        assert_eq!(DomainError::EmptyPrompt.to_string(), "Message is empty");
    }
}
