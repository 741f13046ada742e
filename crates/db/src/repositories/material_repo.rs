//! Repository for the `biological_materials` table.

use biostore_core::types::DbId;
use sqlx::PgPool;

use crate::models::material::{
    BiologicalMaterial, CreateMaterial, UpdateMaterial, DEFAULT_MATERIAL_STATUS,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, material_name, status, expiration_date, transfer_date, donor_id, \
                       ideal_temperature, ideal_humidity, ideal_oxygen_level, created_at, updated_at";

/// Provides CRUD operations for biological materials.
pub struct MaterialRepo;

impl MaterialRepo {
    /// Insert a new material, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaterial,
    ) -> Result<BiologicalMaterial, sqlx::Error> {
        let query = format!(
            "INSERT INTO biological_materials
                (material_name, status, expiration_date, transfer_date, donor_id,
                 ideal_temperature, ideal_humidity, ideal_oxygen_level)
             VALUES ($1, COALESCE($2, $3), $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BiologicalMaterial>(&query)
            .bind(input.material_name.trim())
            .bind(&input.status)
            .bind(DEFAULT_MATERIAL_STATUS)
            .bind(input.expiration_date)
            .bind(input.transfer_date)
            .bind(input.donor_id)
            .bind(input.ideal_temperature)
            .bind(input.ideal_humidity)
            .bind(input.ideal_oxygen_level)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BiologicalMaterial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM biological_materials WHERE id = $1");
        sqlx::query_as::<_, BiologicalMaterial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all materials ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<BiologicalMaterial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM biological_materials ORDER BY material_name, id");
        sqlx::query_as::<_, BiologicalMaterial>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the materials donated by one donor.
    pub async fn list_by_donor(
        pool: &PgPool,
        donor_id: DbId,
    ) -> Result<Vec<BiologicalMaterial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM biological_materials WHERE donor_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, BiologicalMaterial>(&query)
            .bind(donor_id)
            .fetch_all(pool)
            .await
    }

    /// Update a material. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaterial,
    ) -> Result<Option<BiologicalMaterial>, sqlx::Error> {
        let query = format!(
            "UPDATE biological_materials SET
                material_name = COALESCE($2, material_name),
                status = COALESCE($3, status),
                expiration_date = COALESCE($4, expiration_date),
                transfer_date = COALESCE($5, transfer_date),
                donor_id = COALESCE($6, donor_id),
                ideal_temperature = COALESCE($7, ideal_temperature),
                ideal_humidity = COALESCE($8, ideal_humidity),
                ideal_oxygen_level = COALESCE($9, ideal_oxygen_level),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BiologicalMaterial>(&query)
            .bind(id)
            .bind(input.material_name.as_deref().map(str::trim))
            .bind(&input.status)
            .bind(input.expiration_date)
            .bind(input.transfer_date)
            .bind(input.donor_id)
            .bind(input.ideal_temperature)
            .bind(input.ideal_humidity)
            .bind(input.ideal_oxygen_level)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a material. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while conditions or notifications
    /// still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM biological_materials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
