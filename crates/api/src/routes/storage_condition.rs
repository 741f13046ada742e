//! Route definitions for the `/storage-conditions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::storage_condition;
use crate::state::AppState;

/// Routes mounted at `/storage-conditions`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(storage_condition::list).post(storage_condition::create),
        )
        .route(
            "/{id}",
            get(storage_condition::get_by_id)
                .put(storage_condition::update)
                .delete(storage_condition::delete),
        )
}
