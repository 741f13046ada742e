//! Hazard notification entity model.

use biostore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub material_id: DbId,
    pub event_type: String,
    pub details: String,
    pub notification_time: Timestamp,
}
