//! Draft service
//!
//! Validates compose input and delegates to the draft generator port.

use std::{fmt, sync::Arc};

use domain::Draft;
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{DraftGeneratorPort, DraftRequest},
};

/// Service producing AI drafts from recipient/topic input
pub struct DraftService {
    generator: Arc<dyn DraftGeneratorPort>,
}

impl fmt::Debug for DraftService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftService").finish_non_exhaustive()
    }
}

impl DraftService {
    /// Create a new draft service
    pub fn new(generator: Arc<dyn DraftGeneratorPort>) -> Self {
        Self { generator }
    }

    /// Validate the input and generate a draft
    ///
    /// Validation runs before any upstream call: both fields non-empty,
    /// recipient syntactically valid, no CR/LF in either field.
    #[instrument(skip(self, topic))]
    pub async fn generate(&self, recipient: &str, topic: &str) -> Result<Draft, ApplicationError> {
        let request = DraftRequest::parse(recipient, topic)?;

        info!(recipient = %request.recipient, "Generating draft");
        let draft = self.generator.generate(&request).await?;
        debug!(subject = %draft.subject, "Draft generated");

        Ok(draft)
    }

    /// Check if the generator backend is reachable
    pub async fn is_available(&self) -> bool {
        self.generator.is_available().await
    }
}
