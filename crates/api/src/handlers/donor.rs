//! Handlers for the `/donors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biostore_core::audit::{donor_message, AuditAction};
use biostore_core::error::CoreError;
use biostore_core::types::DbId;
use biostore_core::validation::{validate_birth_date, validate_donor_field};
use biostore_db::models::donor::{CreateDonor, Donor, UpdateDonor};
use biostore_db::models::material::BiologicalMaterial;
use biostore_db::repositories::{DonorRepo, EventLogRepo, MaterialRepo};
use chrono::NaiveDate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

pub const DONOR_ENTITY: &str = "Donor";

fn validate_create(input: &CreateDonor, today: NaiveDate) -> Result<(), CoreError> {
    validate_donor_field(&input.first_name, "first_name")?;
    validate_donor_field(&input.last_name, "last_name")?;
    validate_donor_field(&input.gender, "gender")?;
    validate_donor_field(&input.id_number, "id_number")?;
    validate_donor_field(&input.blood_type, "blood_type")?;
    validate_birth_date(input.birth_date, today)
}

fn validate_update(input: &UpdateDonor, today: NaiveDate) -> Result<(), CoreError> {
    let fields = [
        (&input.first_name, "first_name"),
        (&input.last_name, "last_name"),
        (&input.gender, "gender"),
        (&input.id_number, "id_number"),
        (&input.blood_type, "blood_type"),
    ];
    for (value, name) in fields {
        if let Some(value) = value {
            validate_donor_field(value, name)?;
        }
    }
    if let Some(birth_date) = input.birth_date {
        validate_birth_date(birth_date, today)?;
    }
    Ok(())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: DONOR_ENTITY,
        id,
    })
}

/// Fail with 404 unless a donor with this id exists.
pub async fn ensure_donor_exists(state: &AppState, donor_id: DbId) -> AppResult<()> {
    DonorRepo::find_by_id(&state.pool, donor_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| not_found(donor_id))
}

async fn record(
    state: &AppState,
    user: &AuthUser,
    action: AuditAction,
    donor: &Donor,
) -> AppResult<()> {
    let creator = user.creator(action);
    let message = donor_message(&creator, donor.id, &donor.first_name, &donor.last_name);
    EventLogRepo::create(&state.pool, creator.actor_id(), &message).await?;
    Ok(())
}

/// POST /api/v1/donors
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateDonor>,
) -> AppResult<(StatusCode, Json<Donor>)> {
    validate_create(&input, chrono::Utc::now().date_naive())?;

    let donor = DonorRepo::create(&state.pool, &input).await?;
    record(&state, &user, AuditAction::Create, &donor).await?;

    tracing::info!(donor_id = donor.id, user_id = user.user_id, "Donor registered");
    Ok((StatusCode::CREATED, Json(donor)))
}

/// GET /api/v1/donors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Donor>>>> {
    let donors = DonorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: donors }))
}

/// GET /api/v1/donors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Donor>> {
    let donor = DonorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(donor))
}

/// GET /api/v1/donors/{id}/materials
pub async fn list_materials(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<BiologicalMaterial>>>> {
    ensure_donor_exists(&state, id).await?;
    let materials = MaterialRepo::list_by_donor(&state.pool, id).await?;
    Ok(Json(DataResponse { data: materials }))
}

/// PUT /api/v1/donors/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDonor>,
) -> AppResult<Json<Donor>> {
    validate_update(&input, chrono::Utc::now().date_naive())?;

    let donor = DonorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    record(&state, &user, AuditAction::Update, &donor).await?;

    tracing::info!(donor_id = id, user_id = user.user_id, "Donor updated");
    Ok(Json(donor))
}

/// DELETE /api/v1/donors/{id}
///
/// Returns 409 while materials still reference the donor.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let donor = DonorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !DonorRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    record(&state, &user, AuditAction::Delete, &donor).await?;

    tracing::info!(donor_id = id, user_id = user.user_id, "Donor deleted");
    Ok(StatusCode::NO_CONTENT)
}
