//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// The access gate is applied as a layer by the caller so tests can exercise
/// the router with and without it.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Hosting surface (protected by the gate)
        .route("/", get(handlers::pages::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // JSON API
        .route("/api/auth", post(handlers::auth::authenticate))
        .route("/api/draft", post(handlers::draft::generate_draft))
        .route("/api/send", post(handlers::send::send_email))
        // Attach state
        .with_state(state)
}
