//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `security`: the shared access password
//! - `integrations`: Gmail OAuth credentials
//!
//! Built once at process start and passed by reference into the gate and the
//! handlers; nothing reads the process environment after startup.

mod integrations;
mod security;
mod server;

use ai_core::InferenceConfig;
use serde::{Deserialize, Serialize};

pub use integrations::GmailAppConfig;
pub use security::SecurityConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Security configuration
    #[serde(default)]
    pub security: SecurityConfig,

    /// Chat completion configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Gmail configuration (optional)
    #[serde(default)]
    pub gmail: Option<GmailAppConfig>,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Precedence: defaults, then `config.toml` if present, then
    /// `LUMINARY_*` environment variables (double underscore separates
    /// nesting levels, e.g. `LUMINARY_SERVER__PORT`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("inference.base_url", "https://api.groq.com/openai/v1")?
            .set_default("inference.default_model", "llama-3.3-70b-versatile")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("LUMINARY")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
