//! Wire types for the Gemini `generateContent` API
//!
//! The API speaks in `contents` with roles `"user"` and `"model"`; this
//! module owns the translation from the domain's [`Role`] terms.

use gemchat_domain::{Message, Role};
use serde::{Deserialize, Serialize};

/// Role name as the Gemini API expects it
pub(crate) fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub max_output_tokens: u32,
}

/// Build the request body from the full conversation history, in order
pub(crate) fn build_request(
    history: &[Message],
    max_output_tokens: Option<u32>,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: history
            .iter()
            .map(|msg| Content {
                role: wire_role(msg.role),
                parts: vec![Part {
                    text: msg.content.clone(),
                }],
            })
            .collect(),
        generation_config: max_output_tokens.map(|n| GenerationConfig {
            max_output_tokens: n,
        }),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// Extract the reply text from the first candidate, if any
    pub(crate) fn reply_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

/// Gemini API error response body
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub code: i64,
    pub message: String,
    /// Error kind marker, e.g. "RESOURCE_EXHAUSTED"
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mapping() {
        assert_eq!(wire_role(Role::User), "user");
        assert_eq!(wire_role(Role::Assistant), "model");
    }

    #[test]
    fn test_request_preserves_history_order() {
        let history = vec![
            Message::user("What is Python?"),
            Message::assistant("A programming language."),
            Message::user("Show me an example"),
        ];
        let body = serde_json::to_value(build_request(&history, None)).unwrap();

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "Show me an example");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_request_with_output_cap() {
        let body = serde_json::to_value(build_request(&[Message::user("hi")], Some(512))).unwrap();
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 512);
    }

    #[test]
    fn test_reply_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ {"text": "Hello"}, {"text": ", world"} ], "role": "model" } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(response.reply_text().unwrap(), "Hello, world");
    }

    #[test]
    fn test_empty_candidates_yield_no_reply() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.reply_text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": null}]}"#).unwrap();
        assert!(response.reply_text().is_none());
    }

    #[test]
    fn test_error_body_parse() {
        let err: ErrorResponse = serde_json::from_str(
            r#"{
                "error": {
                    "code": 429,
                    "message": "Resource has been exhausted (e.g. check quota).",
                    "status": "RESOURCE_EXHAUSTED"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(err.error.code, 429);
        assert_eq!(err.error.status, "RESOURCE_EXHAUSTED");
    }
}
