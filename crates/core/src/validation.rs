//! Range checks applied at the API boundary before readings and materials
//! reach the condition service.

use chrono::NaiveDate;

use crate::condition::Reading;
use crate::error::CoreError;
use crate::types::Timestamp;

pub const MIN_TEMPERATURE: f64 = -100.0;
pub const MAX_TEMPERATURE: f64 = 100.0;
/// Humidity and oxygen are percentages.
pub const MIN_PERCENT: f64 = 0.0;
pub const MAX_PERCENT: f64 = 100.0;

pub const MIN_MATERIAL_NAME_LEN: usize = 2;
pub const MAX_MATERIAL_NAME_LEN: usize = 100;

pub const MAX_DONOR_FIELD_LEN: usize = 100;

/// Validate that a value is finite and within `[min, max]`.
pub fn validate_range(value: f64, min: f64, max: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || !(min..=max).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Validate the three environmental values of a reading or profile.
pub fn validate_environment(
    temperature: f64,
    humidity: f64,
    oxygen_level: f64,
) -> Result<(), CoreError> {
    validate_range(temperature, MIN_TEMPERATURE, MAX_TEMPERATURE, "temperature")?;
    validate_range(humidity, MIN_PERCENT, MAX_PERCENT, "humidity")?;
    validate_range(oxygen_level, MIN_PERCENT, MAX_PERCENT, "oxygen_level")
}

pub fn validate_reading(reading: &Reading) -> Result<(), CoreError> {
    validate_environment(reading.temperature, reading.humidity, reading.oxygen_level)
}

/// Validate a material name's length after trimming.
pub fn validate_material_name(name: &str) -> Result<(), CoreError> {
    let len = name.trim().chars().count();
    if !(MIN_MATERIAL_NAME_LEN..=MAX_MATERIAL_NAME_LEN).contains(&len) {
        return Err(CoreError::Validation(format!(
            "material_name must be between {MIN_MATERIAL_NAME_LEN} and \
             {MAX_MATERIAL_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// A material's expiration date must lie strictly after `now`.
pub fn validate_expiration_date(expiration: Timestamp, now: Timestamp) -> Result<(), CoreError> {
    if expiration <= now {
        return Err(CoreError::Validation(
            "expiration_date must be in the future".into(),
        ));
    }
    Ok(())
}

/// A material's transfer date must not lie after `now`.
pub fn validate_transfer_date(transfer: Timestamp, now: Timestamp) -> Result<(), CoreError> {
    if transfer > now {
        return Err(CoreError::Validation(
            "transfer_date must be in the past or present".into(),
        ));
    }
    Ok(())
}

/// Validate a required donor text field: non-blank and at most
/// [`MAX_DONOR_FIELD_LEN`] characters after trimming.
pub fn validate_donor_field(value: &str, name: &str) -> Result<(), CoreError> {
    let len = value.trim().chars().count();
    if len == 0 || len > MAX_DONOR_FIELD_LEN {
        return Err(CoreError::Validation(format!(
            "{name} must be between 1 and {MAX_DONOR_FIELD_LEN} characters"
        )));
    }
    Ok(())
}

/// A donor's birth date must lie before `today`.
pub fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    if birth_date >= today {
        return Err(CoreError::Validation("birth_date must be in the past".into()));
    }
    Ok(())
}
