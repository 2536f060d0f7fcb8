//! SQLite store: pool construction and configuration.

use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, StoreResult};
use crate::registry::TableRegistry;

use super::schema;

/// SQLite-backed table store.
///
/// Connections are acquired from an r2d2 pool per operation and returned at
/// the end of it. The table registry is injected at construction and shared
/// with the layers above.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
    registry: Arc<TableRegistry>,
    config: SqliteStoreConfig,
    is_memory: bool,
}

impl Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .field("tables", &self.registry.len())
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteStoreConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Enable WAL mode for better concurrency.
    #[serde(default = "default_true")]
    pub enable_wal: bool,

    /// Enable foreign key constraints.
    #[serde(default = "default_true")]
    pub enable_foreign_keys: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for SqliteStoreConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
            enable_wal: true,
            enable_foreign_keys: true,
        }
    }
}

fn connection_failed(err: impl std::fmt::Display) -> BackendError {
    BackendError::ConnectionFailed {
        backend: "sqlite".to_string(),
        message: err.to_string(),
    }
}

impl SqliteStore {
    /// Creates a new in-memory store.
    pub fn in_memory(registry: Arc<TableRegistry>) -> StoreResult<Self> {
        Self::with_config(":memory:", registry, SqliteStoreConfig::default())
    }

    /// Opens or creates a file-based database.
    pub fn open<P: AsRef<Path>>(path: P, registry: Arc<TableRegistry>) -> StoreResult<Self> {
        Self::with_config(path, registry, SqliteStoreConfig::default())
    }

    /// Creates a store with custom configuration.
    ///
    /// The path `":memory:"` selects in-memory mode; the pool is then pinned
    /// to a single connection, since every in-memory SQLite connection is
    /// its own database.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        registry: Arc<TableRegistry>,
        config: SqliteStoreConfig,
    ) -> StoreResult<Self> {
        let path = path.as_ref();
        let is_memory = path.to_string_lossy() == ":memory:";

        let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
        let enable_wal = config.enable_wal;
        let enable_foreign_keys = config.enable_foreign_keys;
        let init = move |conn: &mut rusqlite::Connection| -> Result<(), rusqlite::Error> {
            conn.busy_timeout(busy_timeout)?;
            if enable_foreign_keys {
                conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            }
            if enable_wal {
                conn.query_row("PRAGMA journal_mode = WAL;", [], |_| Ok(()))?;
            }
            Ok(())
        };

        let manager = if is_memory {
            SqliteConnectionManager::memory().with_init(init)
        } else {
            SqliteConnectionManager::file(path).with_init(init)
        };

        let max_size = if is_memory { 1 } else { config.max_connections };
        let min_idle = if is_memory { 1 } else { config.min_connections };

        let pool = Pool::builder()
            .max_size(max_size)
            .min_idle(Some(min_idle))
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms))
            .build(manager)
            .map_err(connection_failed)?;

        Ok(Self {
            pool,
            registry,
            config,
            is_memory,
        })
    }

    /// Creates the lab tables if they do not exist.
    pub fn init_schema(&self) -> StoreResult<()> {
        let conn = self.get_connection()?;
        schema::init(&conn).map_err(|e| {
            BackendError::Internal {
                backend: "sqlite".to_string(),
                message: format!("failed to initialize schema: {e}"),
            }
            .into()
        })
    }

    /// Whether the store is in-memory.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// The active configuration.
    pub fn config(&self) -> &SqliteStoreConfig {
        &self.config
    }

    pub(crate) fn registry_ref(&self) -> &TableRegistry {
        &self.registry
    }

    pub(crate) fn get_connection(
        &self,
    ) -> StoreResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| connection_failed(e).into())
    }
}
