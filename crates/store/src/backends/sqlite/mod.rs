//! SQLite backend implementation.
//!
//! A pooled SQLite store implementing [`crate::core::TableStore`]. Supports
//! both in-memory databases (great for testing) and file-based databases
//! (for development and small deployments).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use seqgate_store::backends::sqlite::SqliteStore;
//! use seqgate_store::registry::TableRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(TableRegistry::with_lab_tables());
//! let store = SqliteStore::in_memory(registry)?;
//! store.init_schema()?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod schema;
mod table_ops;

pub use backend::{SqliteStore, SqliteStoreConfig};
