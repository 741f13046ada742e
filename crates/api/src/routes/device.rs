//! Route definitions for sensor device ingestion.

use axum::routing::post;
use axum::Router;

use crate::handlers::storage_condition;
use crate::state::AppState;

/// Routes mounted at `/devices`.
///
/// ```text
/// POST   /storage-conditions   -> create_from_device
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/storage-conditions",
        post(storage_condition::create_from_device),
    )
}
