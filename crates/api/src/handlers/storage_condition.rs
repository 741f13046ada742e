//! Handlers for the `/storage-conditions` resource and device ingestion.
//!
//! Readings are range-checked here; scoring, zoning, notification and audit
//! logging happen in [`biostore_core::condition_service::ConditionService`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biostore_core::condition::{Reading, StorageCondition};
use biostore_core::types::DbId;
use biostore_core::validation::validate_reading;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/storage-conditions
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<StorageCondition>>>> {
    let conditions = state.conditions.get_all_conditions().await?;
    Ok(Json(DataResponse { data: conditions }))
}

/// GET /api/v1/storage-conditions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StorageCondition>> {
    let condition = state.conditions.get_condition_by_id(id).await?;
    Ok(Json(condition))
}

/// POST /api/v1/storage-conditions
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(reading): Json<Reading>,
) -> AppResult<(StatusCode, Json<StorageCondition>)> {
    validate_reading(&reading)?;
    let condition = state
        .conditions
        .create_condition(Some(user.user_id), &reading)
        .await?;
    Ok((StatusCode::CREATED, Json(condition)))
}

/// POST /api/v1/devices/storage-conditions
///
/// Unattended sensor submission. No actor is recorded.
pub async fn create_from_device(
    State(state): State<AppState>,
    Json(reading): Json<Reading>,
) -> AppResult<(StatusCode, Json<StorageCondition>)> {
    validate_reading(&reading)?;
    let condition = state.conditions.create_condition(None, &reading).await?;
    Ok((StatusCode::CREATED, Json(condition)))
}

/// PUT /api/v1/storage-conditions/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(reading): Json<Reading>,
) -> AppResult<Json<StorageCondition>> {
    validate_reading(&reading)?;
    let condition = state
        .conditions
        .update_condition(user.user_id, id, &reading)
        .await?;
    Ok(Json(condition))
}

/// DELETE /api/v1/storage-conditions/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.conditions.delete_condition(user.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
