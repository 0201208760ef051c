//! Send handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, handlers::validate_request, state::AppState};

/// Send request body
///
/// Field names match the wire format the wizard client submits
/// (`emailBody` rather than `body`).
#[derive(Debug, Deserialize, Validate)]
pub struct SendApiRequest {
    /// Recipient email address
    #[validate(length(min = 1, message = "recipient is required"))]
    pub recipient: String,
    /// Final subject line
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    /// Final body text
    #[serde(rename = "emailBody")]
    #[validate(length(min = 1, message = "email body is required"))]
    pub email_body: String,
}

/// Send response body
#[derive(Debug, Serialize)]
pub struct SendApiResponse {
    pub success: bool,
    /// Message ID assigned by the provider
    #[serde(rename = "messageId")]
    pub message_id: String,
}

/// Handle a send request
#[instrument(skip(state, request), fields(recipient = %request.recipient))]
pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<SendApiRequest>,
) -> Result<Json<SendApiResponse>, ApiError> {
    // Unlike the draft route, input is validated before the credential
    // check so a malformed payload is reported as such even on a
    // half-configured deployment.
    validate_request(&request)?;

    let Some(service) = &state.delivery_service else {
        return Err(ApiError::Configuration(
            "Gmail API credentials are not configured".to_string(),
        ));
    };

    let message_id = service
        .send(&request.recipient, &request.subject, &request.email_body)
        .await?;

    Ok(Json(SendApiResponse {
        success: true,
        message_id,
    }))
}
