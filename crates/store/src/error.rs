//! Error types for the table access layer.
//!
//! Errors fall into two groups: client-input errors, which are detected and
//! rejected before any query is issued, and database errors, which are caught
//! at the store boundary, logged with table context, and re-raised as coarse
//! operation wrappers so raw engine error text never crosses the boundary.
//!
//! Use [`StoreError::is_client_error`] to distinguish the two when mapping to
//! a transport-level response.

use thiserror::Error;

/// Result alias used throughout the store crate.
pub type StoreResult<T> = Result<T, StoreError>;

/// Boxed source error carried by the operation wrappers.
pub type BoxedDbError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The primary error type for all table access operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Caller-supplied table name is not in the whitelist. Never reaches the
    /// database.
    #[error("invalid table name: {name}")]
    InvalidTable {
        /// The rejected table name.
        name: String,
    },

    /// Caller-supplied identifier is not a valid positive integer.
    #[error("invalid id: {value}")]
    InvalidId {
        /// The rejected identifier text.
        value: String,
    },

    /// Update requested with zero fields. No query is issued.
    #[error("no fields provided for update")]
    EmptyUpdate,

    /// Insert requested with zero fields. No query is issued.
    #[error("no fields provided for insert")]
    EmptyInsert,

    /// A field key is outside the table's writable column set.
    #[error("unknown column {column} for table {table}")]
    UnknownColumn {
        /// The table being written.
        table: String,
        /// The rejected column name.
        column: String,
    },

    /// A field value is an array or object rather than a scalar.
    #[error("column {column} requires a scalar value")]
    NonScalarValue {
        /// The column carrying the rejected value.
        column: String,
    },

    /// An insert failed inside the database engine.
    #[error("failed to create record in {table}")]
    Creation {
        /// The table being written.
        table: String,
        /// The underlying engine error (logged, never shown to clients).
        #[source]
        source: BoxedDbError,
    },

    /// An update failed inside the database engine.
    #[error("failed to update record in {table}")]
    Update {
        /// The table being written.
        table: String,
        #[source]
        source: BoxedDbError,
    },

    /// A delete failed inside the database engine.
    #[error("failed to delete record from {table}")]
    Deletion {
        /// The table being written.
        table: String,
        #[source]
        source: BoxedDbError,
    },

    /// A read failed inside the database engine.
    #[error("failed to query {table}")]
    Query {
        /// The table being read.
        table: String,
        #[source]
        source: BoxedDbError,
    },

    /// Backend-level failures (pool, connectivity).
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StoreError {
    /// Returns true for errors caused by the shape of the caller's input.
    ///
    /// Client-input errors are rejected before any query is issued and map
    /// to a 400-class response at the transport layer; everything else is a
    /// server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidTable { .. }
                | StoreError::InvalidId { .. }
                | StoreError::EmptyUpdate
                | StoreError::EmptyInsert
                | StoreError::UnknownColumn { .. }
                | StoreError::NonScalarValue { .. }
        )
    }
}

/// Backend-specific errors.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Failed to acquire a connection from the pool.
    #[error("failed to connect to {backend} database: {message}")]
    ConnectionFailed {
        /// Backend name (for example "sqlite").
        backend: String,
        /// Description of the failure.
        message: String,
    },

    /// Any other engine-level failure.
    #[error("{backend} backend error: {message}")]
    Internal {
        /// Backend name.
        backend: String,
        /// Description of the failure.
        message: String,
    },
}
