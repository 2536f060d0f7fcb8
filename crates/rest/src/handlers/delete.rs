//! Delete handler.
//!
//! `DELETE /{table}/{id}`

use axum::Json;
use axum::extract::{Path, State};
use serde_json::json;
use tracing::debug;

use seqgate_store::{RowId, TableStore};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for deleting a single row by primary key.
///
/// The id is validated as a positive integer before any store call.
///
/// # Response
///
/// - `200 OK` - row deleted
/// - `400 Bad Request` - invalid table name or non-numeric id
/// - `404 Not Found` - no row with that id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path((table, id)): Path<(String, String)>,
) -> RestResult<Json<serde_json::Value>>
where
    S: TableStore + Send + Sync,
{
    let table = state.registry().resolve(&table)?;
    let id = RowId::parse(&id)?;

    debug!(table = %table, id = %id, "processing delete request");

    let result = state.store().delete_row(&table, id).await?;
    if result.affected_rows.unwrap_or(0) > 0 {
        Ok(Json(json!({
            "success": true,
            "message": format!("deleted id {id} from {table}"),
        })))
    } else {
        Err(RestError::not_found(format!(
            "record with id {id} not found in {table}"
        )))
    }
}
