//! Record creation handler.
//!
//! `POST /{table}`
//!
//! Creation is only available for the entity types with typed record
//! operations (run, experiment, computer, minion); the handler dispatches
//! on the validated table name. Other whitelisted tables are read-only
//! through this API and respond 400.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use seqgate_store::{
    MutationResult, NewComputer, NewExperiment, NewMinion, NewRun, RecordStore, TableStore, tables,
};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

fn parse_body<T: DeserializeOwned>(body: Value) -> RestResult<T> {
    serde_json::from_value(body)
        .map_err(|e| RestError::bad_request(format!("invalid request body: {e}")))
}

fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Handler for creating a record in one of the creatable tables.
///
/// # Response
///
/// - `201 Created` - MutationResult envelope with the new id
/// - `400 Bad Request` - invalid table, unsupported table, or missing
///   required fields
pub async fn create_record_handler<S>(
    State(state): State<AppState<S>>,
    Path(table): Path<String>,
    Json(body): Json<Value>,
) -> RestResult<(StatusCode, Json<MutationResult>)>
where
    S: TableStore + Send + Sync,
{
    let table = state.registry().resolve(&table)?;

    debug!(table = %table, "processing create request");

    let result = match table.as_str() {
        tables::RUN => {
            let run: NewRun = parse_body(body)?;
            state.store().create_run(run).await?
        }
        tables::EXPERIMENT => {
            let experiment: NewExperiment = parse_body(body)?;
            state.store().create_experiment(experiment).await?
        }
        tables::COMPUTER => {
            let computer: NewComputer = parse_body(body)?;
            if !is_present(&computer.device_name) {
                return Err(RestError::bad_request("device name is required"));
            }
            state.store().add_computer(computer).await?
        }
        tables::MINION => {
            let minion: NewMinion = parse_body(body)?;
            let complete = is_present(&minion.name)
                && is_present(&minion.computer_used)
                && is_present(&minion.device_date)
                && is_present(&minion.notes);
            if !complete {
                return Err(RestError::bad_request("all fields are required"));
            }
            state.store().add_minion(minion).await?
        }
        other => {
            return Err(RestError::bad_request(format!(
                "creation is not supported for {other}"
            )));
        }
    };

    Ok((StatusCode::CREATED, Json(result)))
}
