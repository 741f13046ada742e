//! Handlers for the `/materials` resource.
//!
//! Every write appends an event log entry for the acting user after the row
//! change succeeds.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biostore_core::audit::{material_message, AuditAction};
use biostore_core::condition_service::MATERIAL_ENTITY;
use biostore_core::error::CoreError;
use biostore_core::types::{DbId, Timestamp};
use biostore_core::validation::{
    validate_environment, validate_expiration_date, validate_material_name, validate_range,
    validate_transfer_date, MAX_PERCENT, MAX_TEMPERATURE, MIN_PERCENT, MIN_TEMPERATURE,
};
use biostore_db::models::material::{BiologicalMaterial, CreateMaterial, UpdateMaterial};
use biostore_db::repositories::{EventLogRepo, MaterialRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::donor::ensure_donor_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_create(input: &CreateMaterial, now: Timestamp) -> Result<(), CoreError> {
    validate_material_name(&input.material_name)?;
    validate_expiration_date(input.expiration_date, now)?;
    validate_transfer_date(input.transfer_date, now)?;
    validate_environment(
        input.ideal_temperature,
        input.ideal_humidity,
        input.ideal_oxygen_level,
    )
}

fn validate_update(input: &UpdateMaterial, now: Timestamp) -> Result<(), CoreError> {
    if let Some(name) = &input.material_name {
        validate_material_name(name)?;
    }
    if let Some(expiration) = input.expiration_date {
        validate_expiration_date(expiration, now)?;
    }
    if let Some(transfer) = input.transfer_date {
        validate_transfer_date(transfer, now)?;
    }
    if let Some(t) = input.ideal_temperature {
        validate_range(t, MIN_TEMPERATURE, MAX_TEMPERATURE, "ideal_temperature")?;
    }
    if let Some(h) = input.ideal_humidity {
        validate_range(h, MIN_PERCENT, MAX_PERCENT, "ideal_humidity")?;
    }
    if let Some(o) = input.ideal_oxygen_level {
        validate_range(o, MIN_PERCENT, MAX_PERCENT, "ideal_oxygen_level")?;
    }
    Ok(())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: MATERIAL_ENTITY,
        id,
    })
}

async fn record(
    state: &AppState,
    user: &AuthUser,
    action: AuditAction,
    material: &BiologicalMaterial,
) -> AppResult<()> {
    let creator = user.creator(action);
    let message = material_message(
        &creator,
        material.id,
        &material.material_name,
        &material.status,
    );
    EventLogRepo::create(&state.pool, creator.actor_id(), &message).await?;
    Ok(())
}

/// POST /api/v1/materials
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateMaterial>,
) -> AppResult<(StatusCode, Json<BiologicalMaterial>)> {
    validate_create(&input, chrono::Utc::now())?;
    ensure_donor_exists(&state, input.donor_id).await?;

    let material = MaterialRepo::create(&state.pool, &input).await?;
    record(&state, &user, AuditAction::Create, &material).await?;

    tracing::info!(material_id = material.id, user_id = user.user_id, "Material created");
    Ok((StatusCode::CREATED, Json(material)))
}

/// GET /api/v1/materials
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BiologicalMaterial>>>> {
    let materials = MaterialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: materials }))
}

/// GET /api/v1/materials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BiologicalMaterial>> {
    let material = MaterialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(material))
}

/// PUT /api/v1/materials/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaterial>,
) -> AppResult<Json<BiologicalMaterial>> {
    validate_update(&input, chrono::Utc::now())?;
    if let Some(donor_id) = input.donor_id {
        ensure_donor_exists(&state, donor_id).await?;
    }

    let material = MaterialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    record(&state, &user, AuditAction::Update, &material).await?;

    tracing::info!(material_id = id, user_id = user.user_id, "Material updated");
    Ok(Json(material))
}

/// DELETE /api/v1/materials/{id}
///
/// Returns 409 while conditions or notifications still reference the material.
/// The event log entry describes the material as it was before removal.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let material = MaterialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !MaterialRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    record(&state, &user, AuditAction::Delete, &material).await?;

    tracing::info!(material_id = id, user_id = user.user_id, "Material deleted");
    Ok(StatusCode::NO_CONTENT)
}
