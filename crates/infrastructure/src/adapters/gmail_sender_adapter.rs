//! Gmail sender adapter - Implements EmailSenderPort using integration_gmail

use application::ports::{EmailSenderPort, SenderError};
use async_trait::async_trait;
use domain::Draft;
use integration_gmail::{GmailClient, GmailError};
use tracing::instrument;

/// Adapter delivering drafts through the Gmail REST API
#[derive(Debug)]
pub struct GmailSenderAdapter {
    client: GmailClient,
}

impl GmailSenderAdapter {
    /// Create a new adapter on top of a Gmail client
    pub fn new(client: GmailClient) -> Self {
        Self { client }
    }

    /// Convert client errors to port errors
    fn map_error(e: GmailError) -> SenderError {
        match e {
            GmailError::Configuration(_) => SenderError::NotConfigured,
            GmailError::TokenExchange(msg) => SenderError::AuthenticationFailed(msg),
            GmailError::Api { message, .. } => SenderError::SendFailed(message),
            GmailError::Request(e) => SenderError::SendFailed(e.to_string()),
        }
    }
}

#[async_trait]
impl EmailSenderPort for GmailSenderAdapter {
    #[instrument(skip(self, draft), fields(recipient = %draft.recipient))]
    async fn send(&self, draft: &Draft) -> Result<String, SenderError> {
        self.client
            .send_message(draft.recipient.as_str(), &draft.subject, &draft.body)
            .await
            .map_err(Self::map_error)
    }
}
