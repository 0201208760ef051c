//! Security configuration: the shared access password

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Security configuration
///
/// The access password gates the whole hosting surface. When it is absent
/// (or blank), the gate admits every request - an explicit local-development
/// bypass, not a security boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Shared access password (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub access_password: Option<SecretString>,
}

impl SecurityConfig {
    /// The configured password, trimmed; `None` when unset or blank
    pub fn access_password(&self) -> Option<&str> {
        self.access_password
            .as_ref()
            .map(|p| p.expose_secret().trim())
            .filter(|p| !p.is_empty())
    }
}
