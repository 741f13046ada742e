//! Handlers for reading hazard notifications.

use axum::extract::{Path, State};
use axum::Json;
use biostore_core::condition_service::MATERIAL_ENTITY;
use biostore_core::error::CoreError;
use biostore_core::types::DbId;
use biostore_db::models::notification::Notification;
use biostore_db::repositories::{MaterialRepo, NotificationRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notifications
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let notifications = NotificationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// GET /api/v1/materials/{id}/notifications
pub async fn list_for_material(
    State(state): State<AppState>,
    Path(material_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    MaterialRepo::find_by_id(&state.pool, material_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: MATERIAL_ENTITY,
            id: material_id,
        }))?;

    let notifications = NotificationRepo::list_for_material(&state.pool, material_id).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}
