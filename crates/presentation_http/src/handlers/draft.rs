//! Draft generation handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, handlers::validate_request, state::AppState};

/// Draft request body
#[derive(Debug, Deserialize, Validate)]
pub struct DraftApiRequest {
    /// Recipient email address
    #[validate(length(min = 1, message = "recipient is required"))]
    pub recipient: String,
    /// What the email should be about
    #[validate(length(min = 1, max = 2000, message = "topic must be 1-2000 characters"))]
    pub topic: String,
}

/// Draft response body
#[derive(Debug, Serialize)]
pub struct DraftApiResponse {
    /// Generated subject line
    pub subject: String,
    /// Generated body text
    pub body: String,
}

/// Handle a draft generation request
#[instrument(skip(state, request), fields(recipient = %request.recipient))]
pub async fn generate_draft(
    State(state): State<AppState>,
    Json(request): Json<DraftApiRequest>,
) -> Result<Json<DraftApiResponse>, ApiError> {
    // Credentials are checked before validation, matching the route's
    // degradation contract when the API key is absent.
    let Some(service) = &state.draft_service else {
        return Err(ApiError::Configuration(
            "Draft generator API key is not configured".to_string(),
        ));
    };

    validate_request(&request)?;

    let draft = service.generate(&request.recipient, &request.topic).await?;

    Ok(Json(DraftApiResponse {
        subject: draft.subject,
        body: draft.body,
    }))
}
