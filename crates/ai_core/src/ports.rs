//! Port definitions for the completion engine
//!
//! Defines the traits (ports) that completion adapters must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Request for a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Messages in the conversation
    pub messages: Vec<InferenceMessage>,
    /// Model to use (overrides config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Whether to force a JSON object reply
    #[serde(default)]
    pub json_response: bool,
}

/// A message in the completion request (OpenAI-compatible format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceMessage {
    pub role: String,
    pub content: String,
}

impl InferenceRequest {
    /// Create a request with system prompt and user message
    pub fn with_system(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![
                InferenceMessage {
                    role: "system".to_string(),
                    content: system.into(),
                },
                InferenceMessage {
                    role: "user".to_string(),
                    content: user.into(),
                },
            ],
            model: None,
            temperature: None,
            json_response: false,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set temperature
    pub const fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Require the reply to be a single JSON object
    pub const fn json_object(mut self) -> Self {
        self.json_response = true;
        self
    }
}

/// Response from a completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Generated content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Finish reason, if the server reported one
    pub finish_reason: Option<String>,
}

/// Port for completion engine implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Generate a complete response
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError>;

    /// Check if the completion server is reachable
    async fn health_check(&self) -> Result<bool, InferenceError>;

    /// Get the current default model
    fn default_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_with_system_builds_two_messages() {
        let req = InferenceRequest::with_system("You are helpful", "Hi");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, "system");
        assert_eq!(req.messages[0].content, "You are helpful");
        assert_eq!(req.messages[1].role, "user");
        assert_eq!(req.messages[1].content, "Hi");
        assert!(!req.json_response);
    }

    #[test]
    fn request_builder_chaining() {
        let req = InferenceRequest::with_system("s", "u")
            .with_model("llama")
            .with_temperature(0.3)
            .json_object();
        assert_eq!(req.model, Some("llama".to_string()));
        assert_eq!(req.temperature, Some(0.3));
        assert!(req.json_response);
    }

    #[test]
    fn request_skips_none_fields_in_serialization() {
        let req = InferenceRequest::with_system("s", "u");
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("\"model\""));
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn response_creation() {
        let resp = InferenceResponse {
            content: "{\"subject\":\"Hi\"}".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            finish_reason: Some("stop".to_string()),
        };
        assert!(resp.content.contains("subject"));
        assert_eq!(resp.finish_reason.as_deref(), Some("stop"));
    }
}
