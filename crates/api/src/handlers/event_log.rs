//! Handler for reading the audit event log.

use axum::extract::{Query, State};
use axum::Json;
use biostore_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use biostore_db::models::event_log::EventLog;
use biostore_db::repositories::EventLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/event-logs?limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<EventLog>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let entries = EventLogRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: entries }))
}
