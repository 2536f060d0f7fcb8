//! Core types for table access: pages, field sets, row identifiers, and the
//! mutation envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::registry::TableName;

/// A single result row, keyed by column name. Rows are passed through from
/// the engine unmodified.
pub type Row = serde_json::Map<String, Value>;

/// Pagination parameters for a paginated read, with an optional full-row
/// substring search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    page: u64,
    limit: u64,
    search: Option<String>,
}

impl PageQuery {
    /// Creates a page query. Both `page` and `limit` are clamped to at
    /// least 1.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            search: None,
        }
    }

    /// Attaches a search string.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// 1-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Maximum rows per page.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// The search string, if any.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// A validated positive row identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(i64);

impl RowId {
    /// Wraps an integer id, rejecting zero and negative values.
    pub fn new(id: i64) -> StoreResult<Self> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(StoreError::InvalidId {
                value: id.to_string(),
            })
        }
    }

    /// Parses an id from untrusted text. Non-numeric and non-positive
    /// input fails with [`StoreError::InvalidId`] before any query.
    pub fn parse(value: &str) -> StoreResult<Self> {
        value
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|id| Self::new(id).ok())
            .ok_or_else(|| StoreError::InvalidId {
                value: value.to_string(),
            })
    }

    /// The inner integer.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An ordered mapping from column name to scalar value, used to build
/// insert and update statements. Iteration order is insertion order, and
/// placeholder positions follow it.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: Vec<(String, Value)>,
}

impl FieldSet {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value, replacing any earlier value for the same
    /// column without changing its position.
    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        let column = column.into();
        if let Some(slot) = self.fields.iter_mut().find(|(c, _)| *c == column) {
            slot.1 = value;
        } else {
            self.fields.push((column, value));
        }
    }

    /// Builder-style [`FieldSet::set`].
    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.set(column, value);
        self
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the set has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v))
    }

    /// Iterates column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }
}

impl From<serde_json::Map<String, Value>> for FieldSet {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        let mut fields = FieldSet::new();
        for (column, value) in map {
            fields.set(column, value);
        }
        fields
    }
}

/// Uniform envelope summarizing the effect of an insert, update, or
/// delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResult {
    /// Whether the operation succeeded. Failures surface as errors, so
    /// this is always true on a returned envelope; it exists for the
    /// response wire shape.
    pub success: bool,

    /// Engine-assigned id of an inserted row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<i64>,

    /// Number of rows affected by an update or delete. Zero means no row
    /// matched and is not an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_rows: Option<u64>,

    /// Human-readable summary.
    pub message: String,
}

impl MutationResult {
    /// Envelope for a successful insert.
    pub fn created(table: &TableName, insert_id: i64) -> Self {
        Self {
            success: true,
            insert_id: Some(insert_id),
            affected_rows: None,
            message: format!("{table} record created successfully"),
        }
    }

    /// Envelope for a completed update.
    pub fn updated(table: &TableName, affected_rows: u64) -> Self {
        Self {
            success: true,
            insert_id: None,
            affected_rows: Some(affected_rows),
            message: format!("{table} record updated successfully"),
        }
    }

    /// Envelope for a completed delete.
    pub fn deleted(table: &TableName, affected_rows: u64) -> Self {
        Self {
            success: true,
            insert_id: None,
            affected_rows: Some(affected_rows),
            message: format!("{table} record deleted successfully"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::registry::TableRegistry;

    #[test]
    fn test_offset_is_page_minus_one_times_limit() {
        assert_eq!(PageQuery::new(1, 10).offset(), 0);
        assert_eq!(PageQuery::new(3, 10).offset(), 20);
        assert_eq!(PageQuery::new(7, 25).offset(), 150);
    }

    #[test]
    fn test_page_and_limit_clamped_to_one() {
        let page = PageQuery::new(0, 0);
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_row_id_accepts_positive_integers() {
        assert_eq!(RowId::parse("42").unwrap().get(), 42);
        assert_eq!(RowId::parse(" 7 ").unwrap().get(), 7);
    }

    #[test]
    fn test_row_id_rejects_bad_input() {
        for value in ["abc", "", "-5", "0", "1.5", "1e3"] {
            assert!(
                matches!(RowId::parse(value), Err(StoreError::InvalidId { .. })),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_field_set_preserves_insertion_order() {
        let fields = FieldSet::new()
            .with("zeta", json!(1))
            .with("alpha", json!(2))
            .with("mid", json!(3));
        let columns: Vec<_> = fields.columns().collect();
        assert_eq!(columns, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_field_set_replaces_in_place() {
        let mut fields = FieldSet::new().with("a", json!(1)).with("b", json!(2));
        fields.set("a", json!(9));
        assert_eq!(fields.len(), 2);
        let pairs: Vec<_> = fields.iter().map(|(c, v)| (c.to_string(), v.clone())).collect();
        assert_eq!(pairs[0], ("a".to_string(), json!(9)));
    }

    #[test]
    fn test_mutation_result_wire_shape() {
        let registry = TableRegistry::with_lab_tables();
        let table = registry.resolve("computer").unwrap();

        let created = serde_json::to_value(MutationResult::created(&table, 5)).unwrap();
        assert_eq!(created["success"], json!(true));
        assert_eq!(created["insertId"], json!(5));
        assert!(created.get("affectedRows").is_none());

        let updated = serde_json::to_value(MutationResult::updated(&table, 1)).unwrap();
        assert_eq!(updated["affectedRows"], json!(1));
        assert!(updated.get("insertId").is_none());
    }
}
