//! Actor extraction for handlers that record who changed what.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use biostore_core::audit::{AuditAction, Creator};
use biostore_core::error::CoreError;
use biostore_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The acting user, taken from a JWT Bearer token in the `Authorization`
/// header. Device ingestion routes never extract one.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<StatusCode> {
///     let creator = user.creator(AuditAction::Delete);
///     EventLogRepo::create(&pool, creator.actor_id(), &message).await?;
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's id (from `claims.sub`).
    pub user_id: DbId,
}

impl AuthUser {
    /// Audit creator for a change this user makes.
    pub fn creator(&self, action: AuditAction) -> Creator {
        Creator::User {
            user_id: self.user_id,
            action,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
