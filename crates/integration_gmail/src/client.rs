//! Gmail client for sending messages
//!
//! Uses the Gmail REST API with OAuth offline credentials: each send first
//! exchanges the configured refresh token for a short-lived access token,
//! then posts the base64url-encoded raw message.

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::mime;

/// Gmail API errors
#[derive(Debug, Error)]
pub enum GmailError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("API error: {code} - {message}")]
    Api { code: u16, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

/// Gmail client configuration
#[derive(Debug, Clone)]
pub struct GmailClientConfig {
    /// OAuth client ID
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: SecretString,
    /// Long-lived refresh token authorized for `gmail.send`
    pub refresh_token: SecretString,
    /// OAuth token endpoint
    pub token_url: String,
    /// Gmail REST API base URL
    pub api_base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for GmailClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: SecretString::from(""),
            refresh_token: SecretString::from(""),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            api_base_url: "https://gmail.googleapis.com/gmail/v1".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Gmail client for the REST API
#[derive(Debug, Clone)]
pub struct GmailClient {
    client: Client,
    config: GmailClientConfig,
}

/// Token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Message send request body
#[derive(Debug, Serialize)]
struct SendMessageRequest {
    raw: String,
}

/// API response for a sent message
#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    /// Message ID assigned by Gmail
    pub id: String,
}

/// API error envelope
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: u16,
    message: String,
}

impl GmailClient {
    /// Create a new Gmail client
    ///
    /// # Errors
    ///
    /// Returns a configuration error when any OAuth credential is empty.
    pub fn new(config: GmailClientConfig) -> Result<Self, GmailError> {
        if config.client_id.is_empty() {
            return Err(GmailError::Configuration(
                "client_id is required".to_string(),
            ));
        }
        if config.client_secret.expose_secret().is_empty() {
            return Err(GmailError::Configuration(
                "client_secret is required".to_string(),
            ));
        }
        if config.refresh_token.expose_secret().is_empty() {
            return Err(GmailError::Configuration(
                "refresh_token is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Exchange the refresh token for a short-lived access token
    #[instrument(skip(self))]
    async fn refresh_access_token(&self) -> Result<String, GmailError> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.expose_secret()),
            ("refresh_token", self.config.refresh_token.expose_secret()),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "OAuth token exchange failed");
            return Err(GmailError::TokenExchange(format!("Status {status}: {body}")));
        }

        let token: TokenResponse = response.json().await?;
        debug!("Obtained fresh access token");
        Ok(token.access_token)
    }

    /// Send a plain-text message
    ///
    /// # Returns
    /// Message ID assigned by Gmail
    #[instrument(skip(self, subject, body), fields(to = %to))]
    pub async fn send_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, GmailError> {
        let access_token = self.refresh_access_token().await?;

        let message = mime::build_message(to, subject, body);
        let request = SendMessageRequest {
            raw: mime::encode_raw(&message),
        };

        debug!(message_len = message.len(), "Sending Gmail message");

        let response = self
            .client
            .post(format!(
                "{}/users/me/messages/send",
                self.config.api_base_url.trim_end_matches('/')
            ))
            .bearer_auth(&access_token)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            let sent: SendMessageResponse = response.json().await?;
            Ok(sent.id)
        } else {
            let status = response.status();
            let error: ApiErrorResponse = response.json().await.map_err(|_| GmailError::Api {
                code: status.as_u16(),
                message: status.to_string(),
            })?;
            Err(GmailError::Api {
                code: error.error.code,
                message: error.error.message,
            })
        }
    }
}
