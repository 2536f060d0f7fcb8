//! Paginated read handler.
//!
//! `GET /{table}?page=&limit=&search=`
//!
//! Returns one page of rows from a whitelisted table, ordered by primary
//! key, optionally filtered by a case-insensitive full-row substring
//! search. The success body is the raw row array.

use axum::Json;
use axum::extract::{Path, State};
use tracing::debug;

use seqgate_store::{Row, TableStore};

use crate::error::RestResult;
use crate::extractors::PageParams;
use crate::state::AppState;

/// Handler for the paginated read.
///
/// # Response
///
/// - `200 OK` - JSON array of rows (possibly empty)
/// - `400 Bad Request` - table name not in the whitelist
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    Path(table): Path<String>,
    page: PageParams,
) -> RestResult<Json<Vec<Row>>>
where
    S: TableStore + Send + Sync,
{
    let table = state.registry().resolve(&table)?;

    debug!(
        table = %table,
        page = page.page(),
        limit = page.limit(),
        search = ?page.search(),
        "processing list request"
    );

    let rows = state.store().fetch_page(&table, &page.into_query()).await?;
    Ok(Json(rows))
}
