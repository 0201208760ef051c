//! Wizard session
//!
//! Drives the pure wizard state machine against the draft and delivery
//! services. Every operation takes `&mut self`, so at most one external call
//! is ever outstanding per session; there is no cancellation of an in-flight
//! call, and no automatic retry.

use std::{fmt, mem, sync::Arc};

use domain::{WizardEvent, WizardState, transition};
use tracing::instrument;

use crate::services::{DeliveryService, DraftService};

/// One user's traversal of the wizard
pub struct WizardSession {
    drafts: Arc<DraftService>,
    delivery: Arc<DeliveryService>,
    state: WizardState,
}

impl fmt::Debug for WizardSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl WizardSession {
    /// Create a session at the landing page
    pub fn new(drafts: Arc<DraftService>, delivery: Arc<DeliveryService>) -> Self {
        Self {
            drafts,
            delivery,
            state: WizardState::Landing,
        }
    }

    /// Current wizard state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    fn apply(&mut self, event: WizardEvent) {
        let state = mem::replace(&mut self.state, WizardState::Landing);
        self.state = transition(state, event);
    }

    /// Leave the landing page
    pub fn start(&mut self) {
        self.apply(WizardEvent::Start);
    }

    /// Submit the compose form
    ///
    /// Validation failures and generator failures both surface as an inline
    /// error on the compose form; success moves to preview with the exact
    /// draft the generator produced.
    #[instrument(skip(self, topic))]
    pub async fn submit(&mut self, recipient: &str, topic: &str) {
        if !matches!(self.state, WizardState::Compose { .. }) {
            return;
        }

        match self.drafts.generate(recipient, topic).await {
            Ok(draft) => self.apply(WizardEvent::DraftReady(draft)),
            Err(err) => self.apply(WizardEvent::DraftFailed(err.to_string())),
        }
    }

    /// Rewrite the subject during preview
    pub fn edit_subject(&mut self, subject: impl Into<String>) {
        self.apply(WizardEvent::EditSubject(subject.into()));
    }

    /// Rewrite the body during preview
    pub fn edit_body(&mut self, body: impl Into<String>) {
        self.apply(WizardEvent::EditBody(body.into()));
    }

    /// Send the previewed draft
    #[instrument(skip(self))]
    pub async fn send(&mut self) {
        if !matches!(self.state, WizardState::Preview { .. }) {
            return;
        }

        self.apply(WizardEvent::Send);
        self.run_send().await;
    }

    /// Retry a failed send with the exact same draft
    #[instrument(skip(self))]
    pub async fn retry(&mut self) {
        if !matches!(self.state, WizardState::Error { .. }) {
            return;
        }

        self.apply(WizardEvent::Retry);
        self.run_send().await;
    }

    async fn run_send(&mut self) {
        let Some(draft) = self.state.draft().cloned() else {
            return;
        };

        match self.delivery.send_draft(&draft).await {
            Ok(_) => self.apply(WizardEvent::SendSucceeded),
            Err(err) => self.apply(WizardEvent::SendFailed(err.to_string())),
        }
    }

    /// Abandon a failed send and return to compose
    pub fn back(&mut self) {
        self.apply(WizardEvent::Back);
    }

    /// Start a new email after a successful send
    pub fn reset(&mut self) {
        self.apply(WizardEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use domain::{Draft, EmailAddress};
    use mockall::mock;

    use super::*;
    use crate::ports::{
        DraftGeneratorPort, DraftRequest, EmailSenderPort, GeneratorError, SenderError,
    };

    mock! {
        Generator {}

        #[async_trait]
        impl DraftGeneratorPort for Generator {
            async fn generate(&self, request: &DraftRequest) -> Result<Draft, GeneratorError>;
            async fn is_available(&self) -> bool;
        }
    }

    mock! {
        Sender {}

        #[async_trait]
        impl EmailSenderPort for Sender {
            async fn send(&self, draft: &Draft) -> Result<String, SenderError>;
        }
    }

    fn generated_draft() -> Draft {
        Draft::new(
            EmailAddress::new("a@b.com").unwrap(),
            "Following up",
            "Hi,...",
        )
    }

    fn session(generator: MockGenerator, sender: MockSender) -> WizardSession {
        WizardSession::new(
            Arc::new(DraftService::new(Arc::new(generator))),
            Arc::new(DeliveryService::new(Arc::new(sender))),
        )
    }

    #[tokio::test]
    async fn successful_submit_moves_to_preview_with_exact_draft() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(generated_draft()));

        let mut wizard = session(generator, MockSender::new());
        wizard.start();
        wizard.submit("a@b.com", "follow up").await;

        assert_eq!(
            wizard.state(),
            &WizardState::Preview {
                draft: generated_draft()
            }
        );
    }

    #[tokio::test]
    async fn failed_submit_stays_in_compose_with_inline_error() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(GeneratorError::GenerationFailed("model offline".to_string())));

        let mut wizard = session(generator, MockSender::new());
        wizard.start();
        wizard.submit("a@b.com", "follow up").await;

        let WizardState::Compose { error } = wizard.state() else {
            unreachable!("expected Compose");
        };
        assert!(error.as_deref().unwrap().contains("model offline"));
    }

    #[tokio::test]
    async fn invalid_input_surfaces_as_inline_error_without_generator_call() {
        let mut generator = MockGenerator::new();
        generator.expect_generate().times(0);

        let mut wizard = session(generator, MockSender::new());
        wizard.start();
        wizard.submit("not-an-email", "topic").await;

        assert!(matches!(
            wizard.state(),
            WizardState::Compose { error: Some(_) }
        ));
    }

    #[tokio::test]
    async fn unmodified_draft_is_delivered_exactly_as_generated() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(generated_draft()));

        let mut sender = MockSender::new();
        sender
            .expect_send()
            .withf(|draft| *draft == generated_draft())
            .times(1)
            .returning(|_| Ok("msg-123".to_string()));

        let mut wizard = session(generator, sender);
        wizard.start();
        wizard.submit("a@b.com", "follow up").await;
        wizard.send().await;

        assert!(matches!(wizard.state(), WizardState::Success { .. }));
    }

    #[tokio::test]
    async fn edits_are_carried_into_the_send() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(generated_draft()));

        let mut sender = MockSender::new();
        sender
            .expect_send()
            .withf(|draft| draft.subject == "Rewritten" && draft.body == "New body")
            .times(1)
            .returning(|_| Ok("msg-123".to_string()));

        let mut wizard = session(generator, sender);
        wizard.start();
        wizard.submit("a@b.com", "follow up").await;
        wizard.edit_subject("Rewritten");
        wizard.edit_body("New body");
        wizard.send().await;

        assert!(matches!(wizard.state(), WizardState::Success { .. }));
    }

    #[tokio::test]
    async fn failed_send_enters_error_and_retry_replays_same_draft() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(generated_draft()));

        let mut sender = MockSender::new();
        // Both the initial send and the retry must carry the same draft.
        sender
            .expect_send()
            .withf(|draft| *draft == generated_draft())
            .times(2)
            .returning(|_| Err(SenderError::SendFailed("quota exceeded".to_string())));

        let mut wizard = session(generator, sender);
        wizard.start();
        wizard.submit("a@b.com", "follow up").await;
        wizard.send().await;

        let WizardState::Error { message, .. } = wizard.state() else {
            unreachable!("expected Error");
        };
        assert!(message.contains("quota exceeded"));

        wizard.retry().await;
        assert!(matches!(wizard.state(), WizardState::Error { .. }));
    }

    #[tokio::test]
    async fn back_from_error_clears_draft_and_returns_to_compose() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(generated_draft()));

        let mut sender = MockSender::new();
        sender
            .expect_send()
            .returning(|_| Err(SenderError::SendFailed("quota exceeded".to_string())));

        let mut wizard = session(generator, sender);
        wizard.start();
        wizard.submit("a@b.com", "follow up").await;
        wizard.send().await;
        wizard.back();

        assert_eq!(wizard.state(), &WizardState::compose());
        assert!(wizard.state().draft().is_none());
    }

    #[tokio::test]
    async fn reset_after_success_returns_to_compose() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(generated_draft()));

        let mut sender = MockSender::new();
        sender
            .expect_send()
            .returning(|_| Ok("msg-123".to_string()));

        let mut wizard = session(generator, sender);
        wizard.start();
        wizard.submit("a@b.com", "follow up").await;
        wizard.send().await;
        wizard.reset();

        assert_eq!(wizard.state(), &WizardState::compose());
    }

    #[tokio::test]
    async fn send_outside_preview_is_ignored() {
        let mut sender = MockSender::new();
        sender.expect_send().times(0);

        let mut wizard = session(MockGenerator::new(), sender);
        wizard.send().await;

        assert_eq!(wizard.state(), &WizardState::Landing);
    }

    #[tokio::test]
    async fn submit_outside_compose_is_ignored() {
        let mut generator = MockGenerator::new();
        generator.expect_generate().times(0);

        let mut wizard = session(generator, MockSender::new());
        wizard.submit("a@b.com", "topic").await;

        assert_eq!(wizard.state(), &WizardState::Landing);
    }
}
