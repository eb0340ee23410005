//! Prompt value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user prompt to be sent to the model (Value Object)
///
/// Guarantees the content is non-empty after trimming — the only input
/// validation this program performs. Construction fails before any
/// session state is touched, so a rejected prompt leaves no trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Create a new prompt, rejecting empty or whitespace-only input
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(Self { content })
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_creation() {
        let p = Prompt::new("What is Python?").unwrap();
        assert_eq!(p.content(), "What is Python?");
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert_eq!(Prompt::new("").unwrap_err(), DomainError::EmptyPrompt);
        assert_eq!(Prompt::new("   \n").unwrap_err(), DomainError::EmptyPrompt);
    }

    #[test]
    fn test_inner_whitespace_kept() {
        // Only fully-blank input is invalid; interior whitespace is content
        let p = Prompt::new("  hi  ").unwrap();
        assert_eq!(p.into_content(), "  hi  ");
    }
}
