//! Third-party integration configuration: Gmail

use integration_gmail::GmailClientConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Gmail OAuth configuration
///
/// All three credentials must be present for the send route to work; the
/// route degrades to a configuration error otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmailAppConfig {
    /// OAuth client ID
    #[serde(default)]
    pub client_id: String,

    /// OAuth client secret (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub client_secret: Option<SecretString>,

    /// Long-lived refresh token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub refresh_token: Option<SecretString>,

    /// OAuth token endpoint
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// Gmail REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_token_url() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_api_base_url() -> String {
    "https://gmail.googleapis.com/gmail/v1".to_string()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

/// A secret's trimmed contents; `None` when unset or blank
fn secret_str(secret: &Option<SecretString>) -> Option<&str> {
    secret
        .as_ref()
        .map(|s| s.expose_secret().trim())
        .filter(|s| !s.is_empty())
}

impl Default for GmailAppConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: None,
            refresh_token: None,
            token_url: default_token_url(),
            api_base_url: default_api_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl GmailAppConfig {
    /// Whether all three OAuth credentials are present
    pub fn is_configured(&self) -> bool {
        !self.client_id.trim().is_empty()
            && secret_str(&self.client_secret).is_some()
            && secret_str(&self.refresh_token).is_some()
    }

    /// Convert to the client-level configuration, trimming credentials
    pub fn to_client_config(&self) -> GmailClientConfig {
        GmailClientConfig {
            client_id: self.client_id.trim().to_string(),
            client_secret: SecretString::from(secret_str(&self.client_secret).unwrap_or_default()),
            refresh_token: SecretString::from(secret_str(&self.refresh_token).unwrap_or_default()),
            token_url: self.token_url.clone(),
            api_base_url: self.api_base_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> GmailAppConfig {
        GmailAppConfig {
            client_id: "client-123".to_string(),
            client_secret: Some(SecretString::from("oauth-secret")),
            refresh_token: Some(SecretString::from("1//refresh")),
            ..Default::default()
        }
    }

    #[test]
    fn default_config_is_not_configured() {
        assert!(!GmailAppConfig::default().is_configured());
    }

    #[test]
    fn full_credentials_are_configured() {
        assert!(full_config().is_configured());
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let config = GmailAppConfig {
            refresh_token: Some(SecretString::from("  ")),
            ..full_config()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn client_config_carries_trimmed_credentials() {
        let config = GmailAppConfig {
            client_id: "  client-123  ".to_string(),
            ..full_config()
        };
        let client_config = config.to_client_config();
        assert_eq!(client_config.client_id, "client-123");
        assert_eq!(client_config.client_secret.expose_secret(), "oauth-secret");
    }

    #[test]
    fn defaults_point_at_google() {
        let config = GmailAppConfig::default();
        assert_eq!(config.token_url, "https://oauth2.googleapis.com/token");
        assert_eq!(config.api_base_url, "https://gmail.googleapis.com/gmail/v1");
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn secrets_are_never_serialized() {
        let json = serde_json::to_string(&full_config()).unwrap();
        assert!(!json.contains("oauth-secret"));
        assert!(!json.contains("1//refresh"));
    }
}
