//! Table registry and validation gate.
//!
//! The registry is the single authority on which tables the gateway may
//! touch and which columns of each table are writable. It is built once at
//! startup and injected wherever table names from untrusted callers must be
//! checked; nothing in this crate consults an ambient global.
//!
//! Validation produces a [`TableName`], which cannot be constructed any
//! other way. Store operations take `&TableName`, so "validate before
//! query" is enforced by the type system rather than by convention.
//!
//! # Example
//!
//! ```
//! use seqgate_store::registry::TableRegistry;
//!
//! let registry = TableRegistry::with_lab_tables();
//! assert!(registry.resolve("minion").is_ok());
//! assert!(registry.resolve("information_schema").is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{StoreError, StoreResult};

/// Canonical table names served by the gateway.
pub mod tables {
    /// Sequencing experiments.
    pub const EXPERIMENT: &str = "experiment";
    /// Sequencing runs belonging to an experiment.
    pub const RUN: &str = "run";
    /// Barcoding kits and assignments.
    pub const BARCODE: &str = "barcode";
    /// Lab user accounts.
    pub const USER: &str = "user";
    /// Host computers driving sequencing devices.
    pub const COMPUTER: &str = "computer";
    /// Library preparation records.
    pub const LIBRARY_PREP: &str = "library_prep";
    /// MinION sequencing devices.
    pub const MINION: &str = "minion";
    /// Device operators.
    pub const OPERATOR: &str = "operator";
    /// Study participants.
    pub const PARTICIPANT: &str = "participant";
    /// Collected samples.
    pub const SAMPLE: &str = "sample";
    /// Flow cells and other sequencing units.
    pub const SEQUENCING_UNIT: &str = "sequencing_unit";
}

/// Definition of a single whitelisted table: its name and the columns a
/// caller may write through insert/update.
///
/// The primary key `id` is engine-assigned and never writable, so it is not
/// listed here.
#[derive(Debug, Clone)]
pub struct TableDef {
    name: String,
    columns: Vec<String>,
}

impl TableDef {
    /// Creates a table definition from a name and its writable columns.
    pub fn new(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// The table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The writable column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// Immutable whitelist of tables the gateway is allowed to touch.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: BTreeMap<String, TableDef>,
}

impl TableRegistry {
    /// Builds a registry from explicit table definitions.
    ///
    /// Used directly by tests that need an alternate whitelist; production
    /// code uses [`TableRegistry::with_lab_tables`].
    pub fn new(defs: impl IntoIterator<Item = TableDef>) -> Self {
        let tables = defs
            .into_iter()
            .map(|def| (def.name.clone(), def))
            .collect();
        Self { tables }
    }

    /// Builds the registry for the standard lab schema.
    pub fn with_lab_tables() -> Self {
        Self::new([
            TableDef::new(
                tables::EXPERIMENT,
                &["name", "protocol", "metadata", "date_started", "description"],
            ),
            TableDef::new(
                tables::RUN,
                &["date_run_start", "experiment_id", "computer", "minion", "notes"],
            ),
            TableDef::new(tables::BARCODE, &["name", "kit", "notes"]),
            TableDef::new(tables::USER, &["name", "email", "role"]),
            TableDef::new(tables::COMPUTER, &["device_name"]),
            TableDef::new(
                tables::LIBRARY_PREP,
                &["sample_id", "kit", "date_prepared", "operator", "notes"],
            ),
            TableDef::new(
                tables::MINION,
                &["name", "computer_used", "device_date", "notes"],
            ),
            TableDef::new(tables::OPERATOR, &["name", "initials"]),
            TableDef::new(tables::PARTICIPANT, &["name", "date_enrolled", "notes"]),
            TableDef::new(
                tables::SAMPLE,
                &["name", "participant_id", "sample_type", "date_collected", "notes"],
            ),
            TableDef::new(
                tables::SEQUENCING_UNIT,
                &["flow_cell_id", "unit_type", "date_received", "notes"],
            ),
        ])
    }

    /// The validation gate.
    ///
    /// Succeeds iff `name` exactly matches a whitelisted table
    /// (case-sensitive) and returns the proof-of-validation [`TableName`];
    /// fails with [`StoreError::InvalidTable`] otherwise. No side effects.
    pub fn resolve(&self, name: &str) -> StoreResult<TableName> {
        if self.tables.contains_key(name) {
            Ok(TableName {
                name: name.to_string(),
            })
        } else {
            Err(StoreError::InvalidTable {
                name: name.to_string(),
            })
        }
    }

    /// Whether `name` is whitelisted.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// The writable columns of a validated table.
    pub fn writable_columns(&self, table: &TableName) -> StoreResult<&[String]> {
        self.tables
            .get(table.as_str())
            .map(|def| def.columns.as_slice())
            .ok_or_else(|| StoreError::InvalidTable {
                name: table.as_str().to_string(),
            })
    }

    /// Iterates the whitelisted table names.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Number of whitelisted tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// A table name that has passed the validation gate.
///
/// Only [`TableRegistry::resolve`] can construct one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName {
    name: String,
}

impl TableName {
    /// The validated name.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
