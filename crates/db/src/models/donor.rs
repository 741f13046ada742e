//! Donor entity model and DTOs.

use biostore_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `donors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Donor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    /// National identity document number. Unique.
    pub id_number: String,
    pub blood_type: String,
    pub transplant_restrictions: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a donor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonor {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub id_number: String,
    pub blood_type: String,
    /// Free text, empty if omitted.
    #[serde(default)]
    pub transplant_restrictions: String,
}

/// DTO for updating a donor. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDonor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub id_number: Option<String>,
    pub blood_type: Option<String>,
    pub transplant_restrictions: Option<String>,
}
