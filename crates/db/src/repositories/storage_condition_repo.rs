//! Repository for the `storage_conditions` table.

use biostore_core::condition::{NewStorageCondition, StorageCondition};
use biostore_core::types::DbId;
use sqlx::PgPool;

use crate::models::storage_condition::StorageConditionRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, material_id, temperature, humidity, oxygen_level, measurement_time, zone";

/// Provides CRUD operations for storage conditions.
pub struct StorageConditionRepo;

impl StorageConditionRepo {
    /// Insert an evaluated condition, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewStorageCondition,
    ) -> Result<StorageConditionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO storage_conditions
                (material_id, temperature, humidity, oxygen_level, measurement_time, zone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StorageConditionRow>(&query)
            .bind(input.material_id)
            .bind(input.temperature)
            .bind(input.humidity)
            .bind(input.oxygen_level)
            .bind(input.measurement_time)
            .bind(input.zone.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StorageConditionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storage_conditions WHERE id = $1");
        sqlx::query_as::<_, StorageConditionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all conditions in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<StorageConditionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storage_conditions ORDER BY id");
        sqlx::query_as::<_, StorageConditionRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of an existing condition.
    ///
    /// Returns `None` if no row with `condition.id` exists.
    pub async fn update(
        pool: &PgPool,
        condition: &StorageCondition,
    ) -> Result<Option<StorageConditionRow>, sqlx::Error> {
        let query = format!(
            "UPDATE storage_conditions SET
                material_id = $2,
                temperature = $3,
                humidity = $4,
                oxygen_level = $5,
                measurement_time = $6,
                zone = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StorageConditionRow>(&query)
            .bind(condition.id)
            .bind(condition.material_id)
            .bind(condition.temperature)
            .bind(condition.humidity)
            .bind(condition.oxygen_level)
            .bind(condition.measurement_time)
            .bind(condition.zone.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a condition. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM storage_conditions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
