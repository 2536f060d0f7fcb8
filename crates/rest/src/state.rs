//! Application state shared by all request handlers.

use std::sync::Arc;

use seqgate_store::{TableRegistry, TableStore};

use crate::config::ServerConfig;

/// Shared application state: the store, the table registry, and the server
/// configuration.
///
/// Generic over the store type so tests can substitute instrumented
/// implementations of [`TableStore`].
pub struct AppState<S> {
    store: Arc<S>,
    registry: Arc<TableRegistry>,
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is behind an Arc and need not be Clone.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            registry: Arc::clone(&self.registry),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: TableStore> AppState<S> {
    /// Creates a new state from a store, the registry it validates against,
    /// and the server configuration.
    pub fn new(store: Arc<S>, registry: Arc<TableRegistry>, config: ServerConfig) -> Self {
        Self {
            store,
            registry,
            config: Arc::new(config),
        }
    }

    /// The store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The table registry (validation gate).
    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    /// The server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
