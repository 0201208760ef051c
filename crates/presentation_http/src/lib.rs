//! Luminary HTTP presentation layer
//!
//! This crate provides the HTTP surface: the access gate middleware, the
//! three JSON endpoints (auth, draft, send), and the static pages.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::AccessGateLayer;
pub use routes::create_router;
pub use state::AppState;
