//! Wire-protocol DTOs for the generation and comments endpoints.
//!
//! DESIGN
//! ======
//! The generation service historically answered with either a bare JSON
//! string or an object carrying a `text` field, so success parsing accepts
//! both shapes. The request body is serde-encoded rather than built by
//! string interpolation, which keeps quotes and special characters intact.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body for `POST /gpt2`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// User-supplied prompt text.
    pub text: String,
    /// Maximum generated length in tokens, when the user overrides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Sampling temperature, when the user overrides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl GenerateRequest {
    /// Build a request carrying only the prompt.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            length: None,
            temperature: None,
        }
    }
}

/// Success payload shape when the service wraps the output in an object.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

/// Parse the body of a successful generation response.
///
/// Accepts `{"text": "..."}` or a bare JSON string.
///
/// # Errors
///
/// Returns a display-ready message when the body is neither shape.
pub fn parse_generation_payload(body: &str) -> Result<String, String> {
    if let Ok(resp) = serde_json::from_str::<GenerateResponse>(body) {
        return Ok(resp.text);
    }
    serde_json::from_str::<String>(body)
        .map_err(|e| format!("unexpected generation response: {e}"))
}

/// Parse the body of a failed generation response into an error message.
///
/// The service reports failures as a JSON string. A body that does not
/// parse falls back to a status-derived message so the page always has
/// something to render.
pub fn parse_error_payload(body: &str, status: u16) -> String {
    serde_json::from_str::<String>(body)
        .unwrap_or_else(|_| format!("generation failed: {status}"))
}

/// Parse the body of a comments fetch into the displayed sequence.
///
/// # Errors
///
/// Returns a display-ready message when the body is not a JSON array of
/// strings.
pub fn parse_comments_payload(body: &str) -> Result<Vec<String>, String> {
    serde_json::from_str::<Vec<String>>(body)
        .map_err(|e| format!("unexpected comments response: {e}"))
}
