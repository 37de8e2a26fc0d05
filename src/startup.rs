//! Application startup and lifecycle management.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers::{generate, health, pages};
use crate::services::providers::gemini::{GeminiConfig, GeminiProvider};
use crate::services::providers::ModelProvider;
use crate::services::resolver::{self, ModelHandle};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Built once at startup and cloned into every handler; the model handle
/// is never reselected after this point.
#[derive(Clone)]
pub struct AppState {
    pub model: Option<ModelHandle>,
    pub provider: Arc<dyn ModelProvider>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/welcome", get(pages::welcome))
        .route("/home", get(pages::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/generate", post(generate::generate))
        .route("/weekplan", post(generate::weekplan))
        .route("/health", get(health::health))
        .nest_service("/static", ServeDir::new("static"))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application: construct the provider, run the model
    /// resolver once, and bind the listener (port 0 = random port).
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn ModelProvider> = Arc::new(GeminiProvider::new(GeminiConfig {
            api_key: config.gemini.api_key.clone(),
        }));

        let model = if config.gemini.api_key.is_empty() {
            tracing::warn!("GEMINI_API_KEY not found - AI features will be disabled");
            None
        } else {
            let resolution =
                resolver::resolve(provider.as_ref(), &config.gemini.preferred_models).await;

            for attempt in &resolution.attempts {
                match &attempt.error {
                    Some(e) => tracing::debug!(model = %attempt.model, error = %e, "Probe failed"),
                    None => tracing::debug!(model = %attempt.model, "Probe succeeded"),
                }
            }

            match &resolution.handle {
                Some(handle) => {
                    tracing::info!(model = %handle.name(), "Gemini model loaded successfully")
                }
                None => {
                    tracing::warn!("No suitable Gemini model found - AI features disabled")
                }
            }

            resolution.handle
        };

        let state = AppState { model, provider };

        let address = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn http_port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
