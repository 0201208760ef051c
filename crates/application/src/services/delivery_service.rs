//! Delivery service
//!
//! Validates a finished draft and delegates to the email sender port. The
//! header-injection guard runs here as well because the sender assembles raw
//! protocol headers from subject and recipient.

use std::{fmt, sync::Arc};

use domain::{Draft, EmailAddress, ensure_header_safe, ensure_present};
use tracing::{info, instrument};

use crate::{error::ApplicationError, ports::EmailSenderPort};

/// Service delivering finished drafts through the mailbox provider
pub struct DeliveryService {
    sender: Arc<dyn EmailSenderPort>,
}

impl fmt::Debug for DeliveryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryService").finish_non_exhaustive()
    }
}

impl DeliveryService {
    /// Create a new delivery service
    pub fn new(sender: Arc<dyn EmailSenderPort>) -> Self {
        Self { sender }
    }

    /// Validate raw send input and deliver it
    ///
    /// # Returns
    /// Message ID assigned by the provider
    #[instrument(skip(self, body))]
    pub async fn send(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, ApplicationError> {
        ensure_present("recipient", recipient)?;
        ensure_present("subject", subject)?;
        ensure_present("body", body)?;
        ensure_header_safe("recipient", recipient)?;
        ensure_header_safe("subject", subject)?;

        let draft = Draft::new(EmailAddress::new(recipient)?, subject, body);
        self.send_draft(&draft).await
    }

    /// Deliver an already validated draft
    ///
    /// Used by the wizard for retries, which replay the exact same payload.
    pub async fn send_draft(&self, draft: &Draft) -> Result<String, ApplicationError> {
        info!(recipient = %draft.recipient, "Sending email");
        let message_id = self.sender.send(draft).await?;
        info!(message_id = %message_id, "Email sent");
        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;
    use crate::ports::SenderError;

    mock! {
        Sender {}

        #[async_trait]
        impl EmailSenderPort for Sender {
            async fn send(&self, draft: &Draft) -> Result<String, SenderError>;
        }
    }

    #[tokio::test]
    async fn valid_draft_is_delivered_unchanged() {
        let mut sender = MockSender::new();
        sender
            .expect_send()
            .withf(|draft| {
                draft.recipient.as_str() == "a@b.com"
                    && draft.subject == "Following up"
                    && draft.body == "Hi,..."
            })
            .times(1)
            .returning(|_| Ok("msg-123".to_string()));

        let service = DeliveryService::new(Arc::new(sender));
        let message_id = service
            .send("a@b.com", "Following up", "Hi,...")
            .await
            .unwrap();

        assert_eq!(message_id, "msg-123");
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let mut sender = MockSender::new();
        sender.expect_send().times(0);

        let service = DeliveryService::new(Arc::new(sender));
        assert!(service.send("", "Subject", "Body").await.is_err());
        assert!(service.send("a@b.com", "", "Body").await.is_err());
        assert!(service.send("a@b.com", "Subject", "").await.is_err());
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_sender() {
        let mut sender = MockSender::new();
        sender.expect_send().times(0);

        let service = DeliveryService::new(Arc::new(sender));
        let err = service
            .send("not-an-email", "Subject", "Body")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[tokio::test]
    async fn header_injection_in_recipient_is_rejected() {
        let mut sender = MockSender::new();
        sender.expect_send().times(0);

        let service = DeliveryService::new(Arc::new(sender));
        let err = service
            .send("a@b.com\nBcc: x@y.com", "Subject", "Body")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[tokio::test]
    async fn header_injection_in_subject_is_rejected() {
        let mut sender = MockSender::new();
        sender.expect_send().times(0);

        let service = DeliveryService::new(Arc::new(sender));
        let err = service
            .send("a@b.com", "Hi\r\nBcc: x@y.com", "Body")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[tokio::test]
    async fn sender_failure_maps_to_upstream_error() {
        let mut sender = MockSender::new();
        sender
            .expect_send()
            .returning(|_| Err(SenderError::SendFailed("quota exceeded".to_string())));

        let service = DeliveryService::new(Arc::new(sender));
        let err = service
            .send("a@b.com", "Subject", "Body")
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn missing_credentials_map_to_configuration_error() {
        let mut sender = MockSender::new();
        sender
            .expect_send()
            .returning(|_| Err(SenderError::NotConfigured));

        let service = DeliveryService::new(Arc::new(sender));
        let err = service
            .send("a@b.com", "Subject", "Body")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
