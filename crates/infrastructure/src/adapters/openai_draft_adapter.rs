//! Draft generator adapter - Implements DraftGeneratorPort using ai_core
//!
//! Sends the compose input to the chat completion engine with a fixed system
//! instruction that demands a strict `{subject, body}` JSON object, then
//! parses the reply into a domain draft.

use ai_core::{InferenceEngine, InferenceRequest};
use application::ports::{DraftGeneratorPort, DraftRequest, GeneratorError};
use async_trait::async_trait;
use domain::Draft;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// System instruction for the draft model.
///
/// The reply contract (exactly `subject` and `body`, plain text, no
/// "Subject:" prefix) is what the JSON parsing below relies on.
const SYSTEM_PROMPT: &str = "You are an expert email copywriter. Write professional, concise, and engaging emails.\n\
Return your response as valid JSON with exactly two fields:\n\
- \"subject\": A clear, compelling email subject line\n\
- \"body\": The full email body text (plain text, no HTML). Use proper paragraph breaks. Do NOT include a \"Subject:\" prefix in the body.\n\n\
The tone should be professional yet approachable. Keep it concise - no fluff.";

/// Adapter for AI draft generation
pub struct OpenAiDraftAdapter {
    engine: Arc<dyn InferenceEngine>,
}

impl std::fmt::Debug for OpenAiDraftAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiDraftAdapter").finish_non_exhaustive()
    }
}

/// The shape the model is instructed to reply with
#[derive(Debug, Deserialize)]
struct DraftPayload {
    subject: String,
    body: String,
}

impl OpenAiDraftAdapter {
    /// Create a new adapter on top of a completion engine
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }

    /// Convert ai_core errors to port errors
    fn map_error(e: ai_core::InferenceError) -> GeneratorError {
        match e {
            ai_core::InferenceError::MissingApiKey => GeneratorError::NotConfigured,
            ai_core::InferenceError::InvalidResponse(msg) => GeneratorError::MalformedResponse(msg),
            other => GeneratorError::GenerationFailed(other.to_string()),
        }
    }
}

#[async_trait]
impl DraftGeneratorPort for OpenAiDraftAdapter {
    #[instrument(skip(self, request), fields(recipient = %request.recipient))]
    async fn generate(&self, request: &DraftRequest) -> Result<Draft, GeneratorError> {
        let user_prompt = format!(
            "Write an email to {} about the following topic: {}",
            request.recipient, request.topic
        );

        let completion = self
            .engine
            .generate(InferenceRequest::with_system(SYSTEM_PROMPT, user_prompt).json_object())
            .await
            .map_err(Self::map_error)?;

        let payload: DraftPayload = serde_json::from_str(&completion.content)
            .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))?;

        debug!(subject = %payload.subject, "Parsed draft payload");

        Ok(Draft::new(
            request.recipient.clone(),
            payload.subject,
            payload.body,
        ))
    }

    async fn is_available(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use ai_core::{InferenceError, InferenceResponse};

    use super::*;

    /// Engine stub replying with a fixed completion
    struct StubEngine {
        reply: Result<String, fn() -> InferenceError>,
    }

    impl StubEngine {
        fn replying(content: &str) -> Self {
            Self {
                reply: Ok(content.to_string()),
            }
        }

        fn failing(err: fn() -> InferenceError) -> Self {
            Self { reply: Err(err) }
        }
    }

    #[async_trait]
    impl InferenceEngine for StubEngine {
        async fn generate(
            &self,
            request: InferenceRequest,
        ) -> Result<InferenceResponse, InferenceError> {
            assert!(request.json_response);
            assert_eq!(request.messages[0].role, "system");
            match &self.reply {
                Ok(content) => Ok(InferenceResponse {
                    content: content.clone(),
                    model: "llama-3.3-70b-versatile".to_string(),
                    finish_reason: Some("stop".to_string()),
                }),
                Err(err) => Err(err()),
            }
        }

        async fn health_check(&self) -> Result<bool, InferenceError> {
            Ok(self.reply.is_ok())
        }

        fn default_model(&self) -> &str {
            "llama-3.3-70b-versatile"
        }
    }

    fn request() -> DraftRequest {
        DraftRequest::parse("a@b.com", "follow up").unwrap()
    }

    #[tokio::test]
    async fn well_formed_reply_becomes_a_draft() {
        let adapter = OpenAiDraftAdapter::new(Arc::new(StubEngine::replying(
            r#"{"subject":"Following up","body":"Hi,..."}"#,
        )));

        let draft = adapter.generate(&request()).await.unwrap();

        assert_eq!(draft.recipient.as_str(), "a@b.com");
        assert_eq!(draft.subject, "Following up");
        assert_eq!(draft.body, "Hi,...");
    }

    #[tokio::test]
    async fn non_json_reply_is_malformed() {
        let adapter = OpenAiDraftAdapter::new(Arc::new(StubEngine::replying(
            "Sure! Here is your email draft:",
        )));

        let err = adapter.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn json_with_missing_fields_is_malformed() {
        let adapter = OpenAiDraftAdapter::new(Arc::new(StubEngine::replying(
            r#"{"subject":"Only a subject"}"#,
        )));

        let err = adapter.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn missing_api_key_maps_to_not_configured() {
        let adapter = OpenAiDraftAdapter::new(Arc::new(StubEngine::failing(|| {
            InferenceError::MissingApiKey
        })));

        let err = adapter.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GeneratorError::NotConfigured));
    }

    #[tokio::test]
    async fn server_error_maps_to_generation_failed() {
        let adapter = OpenAiDraftAdapter::new(Arc::new(StubEngine::failing(|| {
            InferenceError::ServerError("Status 429: quota exceeded".to_string())
        })));

        let err = adapter.generate(&request()).await.unwrap_err();
        let GeneratorError::GenerationFailed(msg) = err else {
            unreachable!("expected GenerationFailed");
        };
        assert!(msg.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn availability_follows_engine_health() {
        let healthy = OpenAiDraftAdapter::new(Arc::new(StubEngine::replying("{}")));
        assert!(healthy.is_available().await);
    }
}
