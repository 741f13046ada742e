//! Repository for the append-only `event_logs` table.

use biostore_core::types::DbId;
use sqlx::PgPool;

use crate::models::event_log::EventLog;

/// Column list for `event_logs` queries.
const COLUMNS: &str = "id, user_id, message, created_at";

/// Provides append and query operations for the event log.
pub struct EventLogRepo;

impl EventLogRepo {
    /// Append an entry. `user_id` is `None` for device-originated events.
    pub async fn create(
        pool: &PgPool,
        user_id: Option<DbId>,
        message: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO event_logs (user_id, message) VALUES ($1, $2) RETURNING id")
            .bind(user_id)
            .bind(message)
            .fetch_one(pool)
            .await
    }

    /// List entries newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<EventLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM event_logs \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, EventLog>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
