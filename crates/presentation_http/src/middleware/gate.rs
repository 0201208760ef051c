//! Access gate middleware
//!
//! Admits or denies every inbound request to the hosting surface using a
//! single shared secret. The session cookie must equal the configured
//! password; comparison is constant-time. With no password configured the
//! gate admits everything - an explicit local-development bypass.
//!
//! Denied requests receive a self-contained HTML login document with status
//! 401 instead of a redirect, so the response does not reveal whether the
//! requested resource exists.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use subtle::ConstantTimeEq;
use tower::{Layer, Service};
use tracing::debug;

use crate::handlers::pages;

/// Name of the session cookie carrying the access token
pub const SESSION_COOKIE: &str = "luminary_session";

/// Compare two secrets without leaking timing information.
///
/// Length differences still short-circuit; only the content comparison is
/// constant-time.
pub(crate) fn secrets_match(candidate: &str, secret: &str) -> bool {
    candidate.as_bytes().ct_eq(secret.as_bytes()).into()
}

/// Layer that applies the access gate
#[derive(Clone, Debug)]
pub struct AccessGateLayer {
    /// Configured shared secret; `None` disables the gate
    secret: Option<Arc<str>>,
    /// Path prefixes that bypass the check entirely
    exempt_prefixes: Arc<[String]>,
}

/// Paths that are always allowed: the API endpoints guard themselves, and
/// static assets plus health probes carry nothing worth protecting.
fn default_exempt_prefixes() -> Vec<String> {
    ["/api/", "/assets/", "/favicon.ico", "/health", "/ready"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl AccessGateLayer {
    /// Create a gate for the given secret; `None` admits all requests
    #[must_use]
    pub fn new(secret: Option<&str>) -> Self {
        Self {
            secret: secret.map(Arc::from),
            exempt_prefixes: default_exempt_prefixes().into(),
        }
    }

    /// Create a gate that admits everything
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Add path prefixes that bypass the gate
    #[must_use]
    pub fn exempt_paths(self, paths: impl IntoIterator<Item = String>) -> Self {
        let mut prefixes = self.exempt_prefixes.to_vec();
        prefixes.extend(paths);
        Self {
            exempt_prefixes: prefixes.into(),
            ..self
        }
    }
}

impl<S> Layer<S> for AccessGateLayer {
    type Service = AccessGate<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AccessGate {
            inner,
            secret: self.secret.clone(),
            exempt_prefixes: Arc::clone(&self.exempt_prefixes),
        }
    }
}

/// Middleware service applying the access gate
#[derive(Clone, Debug)]
pub struct AccessGate<S> {
    inner: S,
    secret: Option<Arc<str>>,
    exempt_prefixes: Arc<[String]>,
}

impl<S> Service<Request> for AccessGate<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let secret = self.secret.clone();
        let exempt_prefixes = Arc::clone(&self.exempt_prefixes);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            // No password configured: local-dev bypass.
            let Some(secret) = secret else {
                return inner.call(req).await;
            };

            let path = req.uri().path();
            if exempt_prefixes.iter().any(|p| path.starts_with(p)) {
                return inner.call(req).await;
            }

            // Access is recomputed per request from the cookie alone; there
            // is no server-side session state.
            let jar = CookieJar::from_headers(req.headers());
            let token = jar.get(SESSION_COOKIE).map(|c| c.value());

            if token.is_some_and(|t| secrets_match(t, &secret)) {
                return inner.call(req).await;
            }

            debug!(path = %path, "Access denied, serving login page");
            Ok(login_response())
        })
    }
}

/// 401 with the self-contained login document
fn login_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        pages::LOGIN_PAGE,
    )
        .into_response()
}
