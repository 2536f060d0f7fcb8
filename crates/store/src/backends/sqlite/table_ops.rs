//! TableStore implementation for SQLite: dynamic SQL construction with
//! bound parameters.
//!
//! Identifiers (table and column names) cannot be bound as values, so they
//! are interpolated — but only identifiers that passed the registry
//! whitelist or came from the engine's own metadata ever reach the SQL
//! text. Every literal value, including the search term and row ids, is a
//! bound parameter.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{Connection, params, params_from_iter};
use serde_json::Value;
use tracing::{debug, error};

use crate::core::TableStore;
use crate::error::{StoreError, StoreResult};
use crate::registry::{TableName, TableRegistry};
use crate::types::{FieldSet, MutationResult, PageQuery, Row, RowId};

use super::SqliteStore;

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn query_error(table: &TableName, err: rusqlite::Error) -> StoreError {
    error!(table = %table, error = %err, "query failed");
    StoreError::Query {
        table: table.to_string(),
        source: Box::new(err),
    }
}

fn json_to_sql(column: &str, value: &Value) -> StoreResult<SqlValue> {
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Bool(b) => Ok(SqlValue::Integer(*b as i64)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(SqlValue::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(SqlValue::Real(f))
            } else {
                Err(StoreError::NonScalarValue {
                    column: column.to_string(),
                })
            }
        }
        Value::String(s) => Ok(SqlValue::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => Err(StoreError::NonScalarValue {
            column: column.to_string(),
        }),
    }
}

fn sql_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::String(BASE64.encode(b)),
    }
}

impl SqliteStore {
    /// Resolves the table's column names from the engine's own metadata.
    fn column_names(&self, conn: &Connection, table: &TableName) -> StoreResult<Vec<String>> {
        let mut stmt = conn
            .prepare("SELECT name FROM pragma_table_info(?1)")
            .map_err(|e| query_error(table, e))?;
        let columns = stmt
            .query_map(params![table.as_str()], |row| row.get::<_, String>(0))
            .map_err(|e| query_error(table, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| query_error(table, e))?;
        if columns.is_empty() {
            return Err(StoreError::Query {
                table: table.to_string(),
                source: format!("no such table: {table}").into(),
            });
        }
        Ok(columns)
    }

    fn check_columns(&self, table: &TableName, fields: &FieldSet) -> StoreResult<()> {
        let allowed = self.registry_ref().writable_columns(table)?;
        for column in fields.columns() {
            if !allowed.iter().any(|c| c == column) {
                return Err(StoreError::UnknownColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    fn bind_fields(&self, fields: &FieldSet) -> StoreResult<Vec<SqlValue>> {
        fields
            .iter()
            .map(|(column, value)| json_to_sql(column, value))
            .collect()
    }
}

#[async_trait]
impl TableStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn registry(&self) -> &TableRegistry {
        self.registry_ref()
    }

    async fn fetch_page(&self, table: &TableName, page: &PageQuery) -> StoreResult<Vec<Row>> {
        let conn = self.get_connection()?;
        let limit = page.limit() as i64;
        let offset = page.offset() as i64;

        let (sql, bindings) = match page.search() {
            None => (
                format!(
                    "SELECT * FROM {} ORDER BY id LIMIT ?1 OFFSET ?2",
                    quote_ident(table.as_str())
                ),
                vec![SqlValue::Integer(limit), SqlValue::Integer(offset)],
            ),
            Some(term) => {
                let columns = self.column_names(&conn, table)?;
                let haystack = columns
                    .iter()
                    .map(|c| format!("COALESCE(CAST({} AS TEXT), '')", quote_ident(c)))
                    .collect::<Vec<_>>()
                    .join(" || ' ' || ");
                (
                    format!(
                        "SELECT * FROM {} WHERE ({haystack}) LIKE ?1 ORDER BY id LIMIT ?2 OFFSET ?3",
                        quote_ident(table.as_str())
                    ),
                    vec![
                        SqlValue::Text(format!("%{term}%")),
                        SqlValue::Integer(limit),
                        SqlValue::Integer(offset),
                    ],
                )
            }
        };

        let mut stmt = conn.prepare(&sql).map_err(|e| query_error(table, e))?;
        let names: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut rows = stmt
            .query(params_from_iter(bindings))
            .map_err(|e| query_error(table, e))?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(|e| query_error(table, e))? {
            let mut record = Row::new();
            for (index, name) in names.iter().enumerate() {
                let value = row.get_ref(index).map_err(|e| query_error(table, e))?;
                record.insert(name.clone(), sql_to_json(value));
            }
            out.push(record);
        }

        debug!(table = %table, rows = out.len(), "fetched page");
        Ok(out)
    }

    async fn delete_row(&self, table: &TableName, id: RowId) -> StoreResult<MutationResult> {
        let conn = self.get_connection()?;
        let sql = format!("DELETE FROM {} WHERE id = ?1", quote_ident(table.as_str()));

        let affected = conn.execute(&sql, params![id.get()]).map_err(|e| {
            error!(table = %table, id = %id, error = %e, "delete failed");
            StoreError::Deletion {
                table: table.to_string(),
                source: Box::new(e),
            }
        })? as u64;

        debug!(table = %table, id = %id, affected, "delete executed");
        Ok(MutationResult::deleted(table, affected))
    }

    async fn insert_row(&self, table: &TableName, fields: &FieldSet) -> StoreResult<MutationResult> {
        if fields.is_empty() {
            return Err(StoreError::EmptyInsert);
        }
        self.check_columns(table, fields)?;

        let conn = self.get_connection()?;
        let columns = fields
            .columns()
            .map(quote_ident)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=fields.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({columns}) VALUES ({placeholders})",
            quote_ident(table.as_str())
        );
        let values = self.bind_fields(fields)?;

        conn.execute(&sql, params_from_iter(values)).map_err(|e| {
            error!(table = %table, error = %e, "insert failed");
            StoreError::Creation {
                table: table.to_string(),
                source: Box::new(e),
            }
        })?;

        let insert_id = conn.last_insert_rowid();
        debug!(table = %table, insert_id, "insert executed");
        Ok(MutationResult::created(table, insert_id))
    }

    async fn update_row(
        &self,
        table: &TableName,
        id: RowId,
        fields: &FieldSet,
    ) -> StoreResult<MutationResult> {
        if fields.is_empty() {
            return Err(StoreError::EmptyUpdate);
        }
        self.check_columns(table, fields)?;

        let conn = self.get_connection()?;
        let assignments = fields
            .columns()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", quote_ident(column), i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {assignments} WHERE id = ?{}",
            quote_ident(table.as_str()),
            fields.len() + 1
        );
        let mut values = self.bind_fields(fields)?;
        values.push(SqlValue::Integer(id.get()));

        let affected = conn.execute(&sql, params_from_iter(values)).map_err(|e| {
            error!(table = %table, id = %id, error = %e, "update failed");
            StoreError::Update {
                table: table.to_string(),
                source: Box::new(e),
            }
        })? as u64;

        debug!(table = %table, id = %id, affected, "update executed");
        Ok(MutationResult::updated(table, affected))
    }
}
