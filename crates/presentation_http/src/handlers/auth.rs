//! Authentication handler
//!
//! Checks the submitted password against the configured secret and issues
//! the session cookie. The cookie value equals the secret itself - existing
//! clients depend on that wire format - so the hardening lives around it:
//! constant-time comparison, http-only, and no logging of the value.

use axum::{Json, extract::State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    error::ApiError,
    middleware::gate::{SESSION_COOKIE, secrets_match},
    state::AppState,
};

/// Session cookie lifetime
const SESSION_MAX_AGE: time::Duration = time::Duration::days(30);

/// Auth request body
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    /// Submitted shared password
    pub password: String,
}

/// Auth response body
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
}

/// Handle a password submission
///
/// Repeated correct submissions simply re-issue an equivalent cookie;
/// repeated wrong submissions never lock out.
#[instrument(skip(state, jar, request))]
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<AuthRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let Some(secret) = state.config.security.access_password() else {
        return Err(ApiError::Configuration(
            "Auth is not configured".to_string(),
        ));
    };

    if !secrets_match(&request.password, secret) {
        return Err(ApiError::Authentication("Wrong password".to_string()));
    }

    info!("Password accepted, issuing session cookie");

    let cookie = session_cookie(secret);
    Ok((jar.add(cookie), Json(AuthResponse { success: true })))
}

/// Build the session cookie: http-only, secure, lax, 30 days, whole site
fn session_cookie(secret: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, secret.to_string()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(SESSION_MAX_AGE)
        .path("/")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("hunter2");
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "hunter2");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(30)));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn auth_request_deserialize() {
        let request: AuthRequest = serde_json::from_str(r#"{"password":"hunter2"}"#).unwrap();
        assert_eq!(request.password, "hunter2");
    }

    #[test]
    fn auth_response_serialize() {
        let json = serde_json::to_string(&AuthResponse { success: true }).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
