//! Storage condition row model.
//!
//! The API works with [`biostore_core::condition::StorageCondition`]; this row
//! only exists to decode the text `zone` column.

use biostore_core::condition::StorageCondition;
use biostore_core::error::CoreError;
use biostore_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `storage_conditions` table.
#[derive(Debug, Clone, FromRow)]
pub struct StorageConditionRow {
    pub id: DbId,
    pub material_id: DbId,
    pub temperature: f64,
    pub humidity: f64,
    pub oxygen_level: f64,
    pub measurement_time: Timestamp,
    pub zone: String,
}

impl TryFrom<StorageConditionRow> for StorageCondition {
    type Error = CoreError;

    fn try_from(row: StorageConditionRow) -> Result<Self, Self::Error> {
        Ok(StorageCondition {
            id: row.id,
            material_id: row.material_id,
            temperature: row.temperature,
            humidity: row.humidity,
            oxygen_level: row.oxygen_level,
            measurement_time: row.measurement_time,
            zone: row.zone.parse()?,
        })
    }
}
