//! Draft generator port
//!
//! Interface to the AI collaborator that turns a recipient/topic pair into a
//! subject/body draft.

use async_trait::async_trait;
use domain::{Draft, DomainError, EmailAddress, ensure_header_safe, ensure_present};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Draft generator errors
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// API key missing from configuration
    #[error("Draft generator is not configured")]
    NotConfigured,

    /// The completion call failed (network, quota, server error)
    #[error("Draft generation failed: {0}")]
    GenerationFailed(String),

    /// The model reply was not the expected `{subject, body}` JSON
    #[error("Malformed draft response: {0}")]
    MalformedResponse(String),
}

/// Validated input for one draft generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRequest {
    /// Recipient the email is addressed to
    pub recipient: EmailAddress,
    /// What the email should be about
    pub topic: String,
}

impl DraftRequest {
    /// Validate raw user input into a request.
    ///
    /// Both fields must be non-empty after trimming, the recipient must be a
    /// syntactically valid email address, and neither field may contain
    /// CR/LF characters.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] describing the first failed check.
    pub fn parse(recipient: &str, topic: &str) -> Result<Self, DomainError> {
        ensure_present("recipient", recipient)?;
        ensure_present("topic", topic)?;
        ensure_header_safe("recipient", recipient)?;
        ensure_header_safe("topic", topic)?;

        Ok(Self {
            recipient: EmailAddress::new(recipient)?,
            topic: topic.trim().to_string(),
        })
    }
}

/// Port for draft generation
#[async_trait]
pub trait DraftGeneratorPort: Send + Sync {
    /// Generate a subject/body draft for the request
    async fn generate(&self, request: &DraftRequest) -> Result<Draft, GeneratorError>;

    /// Check if the generator backend is reachable
    async fn is_available(&self) -> bool;
}
