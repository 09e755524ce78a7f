//! Interface server implementation.

use std::future::Future;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use jobwatch_config::ServerConfig;

use crate::error::ApiError;
use crate::http::routes::create_router;
use crate::state::AppState;

/// Interface server configuration.
#[derive(Debug, Clone)]
pub struct InterfaceConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed to send credentialed requests.
    pub cors_origins: Vec<String>,
}

impl InterfaceConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            cors_origins: Vec::new(),
        }
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for InterfaceConfig {
    fn from(config: &ServerConfig) -> Self {
        Self::new(config.host.clone(), config.port).with_cors_origins(config.cors_origins.clone())
    }
}

/// Build the CORS layer: listed origins, credentials allowed, methods and
/// headers mirrored from the preflight request.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ApiError> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ApiError::Startup(format!("invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// The interface server.
pub struct InterfaceServer {
    config: InterfaceConfig,
    state: Arc<AppState>,
}

impl InterfaceServer {
    pub fn new(config: InterfaceConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Router with CORS and request tracing applied.
    pub fn router(&self) -> Result<Router, ApiError> {
        Ok(create_router(self.state.clone())
            .layer(cors_layer(&self.config.cors_origins)?)
            .layer(TraceLayer::new_for_http()))
    }

    /// Start the server and stop on Ctrl+C.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.run_until(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
    }

    /// Start the server and stop gracefully when `shutdown` completes.
    pub async fn run_until<F>(&self, shutdown: F) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router()?;

        // Host names such as "localhost" are resolved by the bind itself.
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;

        info!("Interface server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Interface server stopped");
        Ok(())
    }
}
