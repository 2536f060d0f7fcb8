//! # seqgate-rest - HTTP API for the Seqgate lab data gateway
//!
//! This crate exposes the whitelisted table access layer of
//! [`seqgate_store`] over HTTP: paginated reads with full-row search,
//! typed record creation, and update/delete by primary key, with a uniform
//! `{"success": false, "message": ...}` error envelope.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use seqgate_rest::{ServerConfig, create_app};
//! use seqgate_store::TableRegistry;
//! use seqgate_store::backends::sqlite::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = Arc::new(TableRegistry::with_lab_tables());
//!     let store = SqliteStore::in_memory(Arc::clone(&registry))?;
//!     store.init_schema()?;
//!
//!     let app = create_app(store, registry);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use seqgate_store::{TableRegistry, TableStore};

/// Creates the Axum application with configuration from the environment.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S, registry: Arc<TableRegistry>) -> Router
where
    S: TableStore + Send + Sync + 'static,
{
    create_app_with_config(store, registry, ServerConfig::from_env())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all routes plus the middleware stack: request tracing, request
/// timeout, and (when enabled) CORS.
///
/// # Example
///
/// ```rust,ignore
/// use seqgate_rest::{ServerConfig, create_app_with_config};
///
/// let config = ServerConfig::for_testing();
/// let app = create_app_with_config(store, registry, config);
/// ```
pub fn create_app_with_config<S>(
    store: S,
    registry: Arc<TableRegistry>,
    config: ServerConfig,
) -> Router
where
    S: TableStore + Send + Sync + 'static,
{
    info!(backend = store.backend_name(), "creating seqgate api");

    let state = AppState::new(Arc::new(store), registry, config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<axum::http::Method> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<axum::http::HeaderName> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes tracing for the server binary.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "seqgate={level},seqgate_rest={level},seqgate_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
