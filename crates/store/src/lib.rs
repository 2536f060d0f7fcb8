//! Seqgate table access layer.
//!
//! This crate is the core of the Seqgate lab data gateway: generic,
//! whitelisted CRUD over the relational tables of a nanopore-sequencing
//! lab (experiments, runs, devices, samples, and so on). It builds
//! parameterized SQL against caller-named tables while a registry-backed
//! validation gate keeps every untrusted table name away from the engine.
//!
//! # Architecture
//!
//! - [`registry`] - the table whitelist and writable-column registry; the
//!   validation gate producing proof-of-validation [`TableName`] values
//! - [`types`] - pages, field sets, row ids, and the mutation envelope
//! - [`error`] - the error taxonomy for all operations
//! - [`core`] - the [`TableStore`] trait backends implement
//! - [`records`] - typed creation wrappers with fixed column sets
//! - [`backends`] - engine implementations (SQLite behind the default
//!   `sqlite` feature)
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use seqgate_store::backends::sqlite::SqliteStore;
//! use seqgate_store::{PageQuery, TableRegistry, TableStore};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(TableRegistry::with_lab_tables());
//! let store = SqliteStore::in_memory(Arc::clone(&registry))?;
//! store.init_schema()?;
//!
//! // The registry is the only way to obtain a TableName.
//! let table = registry.resolve("minion")?;
//! let rows = store.fetch_page(&table, &PageQuery::new(1, 10)).await?;
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod core;
pub mod error;
pub mod records;
pub mod registry;
pub mod types;

pub use crate::core::TableStore;
pub use error::{BackendError, StoreError, StoreResult};
pub use records::{NewComputer, NewExperiment, NewMinion, NewRun, RecordStore};
pub use registry::{TableDef, TableName, TableRegistry, tables};
pub use types::{FieldSet, MutationResult, PageQuery, Row, RowId};
