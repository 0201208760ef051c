//! Infrastructure layer for Luminary
//!
//! Configuration loading and the adapters binding the external clients
//! (chat completion engine, Gmail REST client) to the application ports.

pub mod adapters;
pub mod config;

pub use adapters::{GmailSenderAdapter, OpenAiDraftAdapter};
pub use config::{AppConfig, GmailAppConfig, SecurityConfig, ServerConfig};
