//! Seqgate lab data gateway server.
//!
//! A CRUD gateway over the whitelisted tables of a nanopore-sequencing lab
//! database.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use seqgate_rest::{ServerConfig, create_app_with_config, init_logging};
use seqgate_store::TableRegistry;

#[cfg(feature = "sqlite")]
use seqgate_store::backends::sqlite::{SqliteStore, SqliteStoreConfig};

#[cfg(not(feature = "sqlite"))]
compile_error!("a storage backend feature must be enabled");

/// Creates and initializes the SQLite store from the server configuration.
#[cfg(feature = "sqlite")]
fn create_store(config: &ServerConfig, registry: Arc<TableRegistry>) -> anyhow::Result<SqliteStore> {
    info!(database = %config.database_url, "initializing sqlite store");

    let store = SqliteStore::with_config(
        &config.database_url,
        registry,
        SqliteStoreConfig::default(),
    )?;
    store.init_schema()?;

    Ok(store)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("configuration error: {error}");
        }
        std::process::exit(1);
    }

    let registry = Arc::new(TableRegistry::with_lab_tables());
    let store = create_store(&config, Arc::clone(&registry))?;
    let app = create_app_with_config(store, registry, config.clone());

    serve(app, &config).await
}
