//! Application state shared across handlers

use std::sync::Arc;

use application::{DeliveryService, DraftService};
use infrastructure::AppConfig;

/// Shared application state
///
/// A service is `None` when its upstream credentials are missing; the
/// corresponding route then answers with a configuration error.
#[derive(Clone)]
pub struct AppState {
    /// Draft generation, absent without an API key
    pub draft_service: Option<Arc<DraftService>>,
    /// Mail delivery, absent without Gmail credentials
    pub delivery_service: Option<Arc<DeliveryService>>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("draft_service", &self.draft_service.is_some())
            .field("delivery_service", &self.delivery_service.is_some())
            .finish_non_exhaustive()
    }
}
