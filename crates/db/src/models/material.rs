//! Biological material entity model and DTOs.

use biostore_core::condition::MaterialProfile;
use biostore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Donation status assigned when none is supplied.
pub const DEFAULT_MATERIAL_STATUS: &str = "AVAILABLE";

/// A row from the `biological_materials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BiologicalMaterial {
    pub id: DbId,
    pub material_name: String,
    pub status: String,
    pub expiration_date: Timestamp,
    pub transfer_date: Timestamp,
    pub donor_id: DbId,
    pub ideal_temperature: f64,
    pub ideal_humidity: f64,
    pub ideal_oxygen_level: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&BiologicalMaterial> for MaterialProfile {
    fn from(material: &BiologicalMaterial) -> Self {
        MaterialProfile {
            id: material.id,
            ideal_temperature: material.ideal_temperature,
            ideal_humidity: material.ideal_humidity,
            ideal_oxygen_level: material.ideal_oxygen_level,
        }
    }
}

/// DTO for creating a material.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaterial {
    pub material_name: String,
    /// Defaults to `AVAILABLE` if omitted.
    pub status: Option<String>,
    /// Must be in the future.
    pub expiration_date: Timestamp,
    /// Must not be in the future.
    pub transfer_date: Timestamp,
    pub donor_id: DbId,
    pub ideal_temperature: f64,
    pub ideal_humidity: f64,
    pub ideal_oxygen_level: f64,
}

/// DTO for updating a material. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMaterial {
    pub material_name: Option<String>,
    pub status: Option<String>,
    pub expiration_date: Option<Timestamp>,
    pub transfer_date: Option<Timestamp>,
    pub donor_id: Option<DbId>,
    pub ideal_temperature: Option<f64>,
    pub ideal_humidity: Option<f64>,
    pub ideal_oxygen_level: Option<f64>,
}
