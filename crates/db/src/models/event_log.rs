//! Event log entity model. Immutable once created (no `updated_at`).

use biostore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `event_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventLog {
    pub id: DbId,
    /// `None` for device-originated events.
    pub user_id: Option<DbId>,
    pub message: String,
    pub created_at: Timestamp,
}
