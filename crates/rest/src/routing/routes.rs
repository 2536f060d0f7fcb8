//! Route table for the Seqgate API.

use axum::Router;
use axum::routing::get;

use seqgate_store::TableStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /health` - health check
/// - `GET /{table}` - paginated read with optional search
/// - `POST /{table}` - typed record creation (run, experiment, computer,
///   minion)
/// - `PUT /{table}/{id}` - update by primary key
/// - `DELETE /{table}/{id}` - delete by primary key
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: TableStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route(
            "/{table}",
            get(handlers::list_handler::<S>).post(handlers::create_record_handler::<S>),
        )
        .route(
            "/{table}/{id}",
            axum::routing::put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .with_state(state)
}
