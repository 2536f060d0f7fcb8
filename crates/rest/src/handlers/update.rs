//! Update handler.
//!
//! `PUT /{table}/{id}`

use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;
use tracing::debug;

use seqgate_store::{FieldSet, MutationResult, RowId, TableStore};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for updating a single row by primary key.
///
/// The JSON object body becomes the field set; every key must be a
/// writable column of the table. An empty body is rejected before any
/// store call. Zero affected rows (no row with that id) still succeeds
/// with `affectedRows: 0`.
///
/// # Response
///
/// - `200 OK` - MutationResult envelope
/// - `400 Bad Request` - invalid table, invalid id, empty body, or an
///   unknown column
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path((table, id)): Path<(String, String)>,
    Json(body): Json<serde_json::Map<String, Value>>,
) -> RestResult<Json<MutationResult>>
where
    S: TableStore + Send + Sync,
{
    let table = state.registry().resolve(&table)?;
    let id = RowId::parse(&id)?;

    if body.is_empty() {
        return Err(RestError::bad_request("no fields provided for update"));
    }

    debug!(table = %table, id = %id, fields = body.len(), "processing update request");

    let fields = FieldSet::from(body);
    let result = state.store().update_row(&table, id, &fields).await?;
    Ok(Json(result))
}
