//! Storage traits and abstractions.
//!
//! [`TableStore`] is the seam between the HTTP layer and a concrete engine:
//! generic CRUD over validated table names, with all SQL construction and
//! parameter binding behind it. Backends implement it; the typed record
//! operations in [`crate::records`] layer on top of it.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::registry::{TableName, TableRegistry};
use crate::types::{FieldSet, MutationResult, PageQuery, Row, RowId};

/// Generic access to the whitelisted tables.
///
/// Every operation takes a pre-validated [`TableName`]; the table whitelist
/// check happens in [`TableRegistry::resolve`] before a name can reach this
/// trait. Each operation acquires a connection for its own duration and is a
/// single atomic statement from the caller's perspective; nothing here
/// retries, and no transaction spans multiple operations.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Name of the underlying engine (for example "sqlite").
    fn backend_name(&self) -> &'static str;

    /// The registry this store was built with.
    fn registry(&self) -> &TableRegistry;

    /// Reads one page of rows, ordered by primary key.
    ///
    /// With a search string, matches rows whose space-joined column text
    /// contains it as a case-insensitive substring (a full-row scan). An
    /// empty result is a valid, non-error outcome.
    async fn fetch_page(&self, table: &TableName, page: &PageQuery) -> StoreResult<Vec<Row>>;

    /// Deletes at most one row by primary key. Zero affected rows is not an
    /// error; callers map it to a not-found signal.
    async fn delete_row(&self, table: &TableName, id: RowId) -> StoreResult<MutationResult>;

    /// Inserts one row with an explicit column list and one bound
    /// placeholder per field, in field order. Field keys must belong to the
    /// table's writable column set.
    async fn insert_row(&self, table: &TableName, fields: &FieldSet) -> StoreResult<MutationResult>;

    /// Updates one row by primary key. Fails fast with
    /// [`crate::error::StoreError::EmptyUpdate`] when `fields` is empty;
    /// zero affected rows means no row matched and is not an error.
    async fn update_row(
        &self,
        table: &TableName,
        id: RowId,
        fields: &FieldSet,
    ) -> StoreResult<MutationResult>;
}
