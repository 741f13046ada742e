//! Repository for the `notifications` table.

use biostore_core::hazard::NewNotification;
use biostore_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::Notification;

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, material_id, event_type, details, notification_time";

/// Provides insert and query operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Store a notification, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &NewNotification) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications (material_id, event_type, details, notification_time) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(input.material_id)
        .bind(&input.event_type)
        .bind(&input.details)
        .bind(input.notification_time)
        .fetch_one(pool)
        .await
    }

    /// List every notification, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications ORDER BY notification_time DESC, id DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .fetch_all(pool)
            .await
    }

    /// List notifications raised for one material, newest first.
    pub async fn list_for_material(
        pool: &PgPool,
        material_id: DbId,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE material_id = $1 \
             ORDER BY notification_time DESC, id DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(material_id)
            .fetch_all(pool)
            .await
    }
}
