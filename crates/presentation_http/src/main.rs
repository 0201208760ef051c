//! Luminary HTTP Server
//!
//! Main entry point for the mail-drafting wizard backend.

use std::{sync::Arc, time::Duration};

use ai_core::OpenAiChatEngine;
use application::{DeliveryService, DraftService};
use infrastructure::{AppConfig, GmailSenderAdapter, OpenAiDraftAdapter};
use integration_gmail::GmailClient;
use presentation_http::{AccessGateLayer, create_router, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luminary_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Luminary v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        gate_enabled = config.security.access_password().is_some(),
        "Configuration loaded"
    );

    // Draft generation degrades to a configuration error without an API key.
    let draft_service = match OpenAiChatEngine::new(config.inference.clone()) {
        Ok(engine) => Some(Arc::new(DraftService::new(Arc::new(
            OpenAiDraftAdapter::new(Arc::new(engine)),
        )))),
        Err(e) => {
            warn!("Draft generation disabled: {}", e);
            None
        },
    };

    // Mail delivery degrades the same way without Gmail credentials.
    let delivery_service = config
        .gmail
        .as_ref()
        .filter(|gmail| gmail.is_configured())
        .and_then(|gmail| match GmailClient::new(gmail.to_client_config()) {
            Ok(client) => Some(Arc::new(DeliveryService::new(Arc::new(
                GmailSenderAdapter::new(client),
            )))),
            Err(e) => {
                warn!("Mail delivery disabled: {}", e);
                None
            },
        });

    if delivery_service.is_none() {
        warn!("Gmail credentials missing, /api/send will answer with a configuration error");
    }

    let state = AppState {
        draft_service,
        delivery_service,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    // CORS: permissive in development, restricted when origins are listed.
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let gate = AccessGateLayer::new(config.security.access_password());

    // Layer order matters: the gate sits outermost so denied requests
    // never reach the application stack.
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(gate);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        () = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
}
