//! Repository for the `donors` table.

use biostore_core::types::DbId;
use sqlx::PgPool;

use crate::models::donor::{CreateDonor, Donor, UpdateDonor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, birth_date, gender, id_number, blood_type, \
                       transplant_restrictions, created_at, updated_at";

/// Provides CRUD operations for donors.
pub struct DonorRepo;

impl DonorRepo {
    /// Insert a new donor, returning the created row.
    ///
    /// Fails with a unique violation if `id_number` is already registered.
    pub async fn create(pool: &PgPool, input: &CreateDonor) -> Result<Donor, sqlx::Error> {
        let query = format!(
            "INSERT INTO donors
                (first_name, last_name, birth_date, gender, id_number, blood_type,
                 transplant_restrictions)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donor>(&query)
            .bind(input.first_name.trim())
            .bind(input.last_name.trim())
            .bind(input.birth_date)
            .bind(input.gender.trim())
            .bind(input.id_number.trim())
            .bind(input.blood_type.trim())
            .bind(&input.transplant_restrictions)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Donor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donors WHERE id = $1");
        sqlx::query_as::<_, Donor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all donors ordered by last name, then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Donor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donors ORDER BY last_name, first_name, id");
        sqlx::query_as::<_, Donor>(&query).fetch_all(pool).await
    }

    /// Update a donor. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDonor,
    ) -> Result<Option<Donor>, sqlx::Error> {
        let query = format!(
            "UPDATE donors SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                birth_date = COALESCE($4, birth_date),
                gender = COALESCE($5, gender),
                id_number = COALESCE($6, id_number),
                blood_type = COALESCE($7, blood_type),
                transplant_restrictions = COALESCE($8, transplant_restrictions),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donor>(&query)
            .bind(id)
            .bind(input.first_name.as_deref().map(str::trim))
            .bind(input.last_name.as_deref().map(str::trim))
            .bind(input.birth_date)
            .bind(input.gender.as_deref().map(str::trim))
            .bind(input.id_number.as_deref().map(str::trim))
            .bind(input.blood_type.as_deref().map(str::trim))
            .bind(&input.transplant_restrictions)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a donor. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while materials still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM donors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
