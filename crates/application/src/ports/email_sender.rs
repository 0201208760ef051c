//! Email sender port
//!
//! Interface to the mailbox provider that delivers a finished draft.

use async_trait::async_trait;
use domain::Draft;
use thiserror::Error;

/// Email sender errors
#[derive(Debug, Error)]
pub enum SenderError {
    /// Provider credentials missing from configuration
    #[error("Email sender is not configured")]
    NotConfigured,

    /// The credential exchange with the provider failed
    #[error("Sender authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The send call failed (network, quota, provider error)
    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// Port for mail delivery
#[async_trait]
pub trait EmailSenderPort: Send + Sync {
    /// Deliver the draft to its recipient
    ///
    /// # Returns
    /// Message ID assigned by the provider
    async fn send(&self, draft: &Draft) -> Result<String, SenderError>;
}
