//! Route definitions for the `/donors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::donor;
use crate::state::AppState;

/// Routes mounted at `/donors`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /{id}/materials     -> list_materials
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(donor::list).post(donor::create))
        .route(
            "/{id}",
            get(donor::get_by_id).put(donor::update).delete(donor::delete),
        )
        .route("/{id}/materials", get(donor::list_materials))
}
