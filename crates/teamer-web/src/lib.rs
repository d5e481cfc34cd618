//! TeamerHQ Web Server
//!
//! Axum-based server for the landing page, the status dashboard and a
//! read-only JSON mirror of the status data.

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use teamer_core::{Catalog, TeamerError};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

impl ServerConfig {
    /// Reject configurations that cannot be bound.
    pub fn validate(&self) -> Result<(), TeamerError> {
        if self.host.trim().is_empty() {
            return Err(TeamerError::config("host must not be empty"));
        }
        if self.port == 0 {
            return Err(TeamerError::config("port must be non-zero"));
        }
        Ok(())
    }

    /// Base URL for log and banner output.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/status", get(routes::api::get_status))
        .route("/incidents/{id}", get(routes::api::get_incident));

    Router::new()
        .route("/", get(routes::landing::index))
        .route("/status", get(routes::status::overview))
        .route("/status/incidents/{id}", get(routes::incidents::detail))
        .nest("/api", api_routes)
        .fallback(routes::not_found::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(catalog: Catalog, config: &ServerConfig) -> anyhow::Result<()> {
    config.validate()?;
    let app = create_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Web server listening on {}", config.url());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
