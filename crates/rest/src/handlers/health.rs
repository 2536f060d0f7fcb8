//! Health check endpoint handler.

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use seqgate_store::TableStore;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint, for load balancers and
/// monitoring.
///
/// # Response
///
/// - `200 OK` - `{"status": "healthy", "backend": ..., "timestamp": ...}`
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<Value>>
where
    S: TableStore + Send + Sync,
{
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "backend": state.store().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
