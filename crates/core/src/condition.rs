//! Storage condition records and the readings that produce them.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::{DbId, Timestamp};
use crate::zone::StorageZone;

/// Ideal preservation thresholds of a biological material.
///
/// Read-only from the point of view of condition evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialProfile {
    pub id: DbId,
    pub ideal_temperature: f64,
    pub ideal_humidity: f64,
    pub ideal_oxygen_level: f64,
}

/// A raw environmental measurement for one material.
///
/// Carries no timestamp: measurement time is always stamped on ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Reading {
    pub material_id: DbId,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Oxygen concentration, percent.
    pub oxygen_level: f64,
}

/// A persisted, zoned storage condition.
///
/// Serializes with an extra `zone_description` field next to `zone`.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageCondition {
    pub id: DbId,
    pub material_id: DbId,
    pub temperature: f64,
    pub humidity: f64,
    pub oxygen_level: f64,
    pub measurement_time: Timestamp,
    pub zone: StorageZone,
}

impl Serialize for StorageCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StorageCondition", 8)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("material_id", &self.material_id)?;
        state.serialize_field("temperature", &self.temperature)?;
        state.serialize_field("humidity", &self.humidity)?;
        state.serialize_field("oxygen_level", &self.oxygen_level)?;
        state.serialize_field("measurement_time", &self.measurement_time)?;
        state.serialize_field("zone", &self.zone)?;
        state.serialize_field("zone_description", self.zone.description())?;
        state.end()
    }
}

impl StorageCondition {
    /// Replace every measured field and the material reference.
    ///
    /// Zone and measurement time are left for the caller to re-derive.
    pub fn apply_reading(&mut self, reading: &Reading) {
        self.material_id = reading.material_id;
        self.temperature = reading.temperature;
        self.humidity = reading.humidity;
        self.oxygen_level = reading.oxygen_level;
    }
}

/// A storage condition that has been evaluated but not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStorageCondition {
    pub material_id: DbId,
    pub temperature: f64,
    pub humidity: f64,
    pub oxygen_level: f64,
    pub measurement_time: Timestamp,
    pub zone: StorageZone,
}
