//! Storage risk zones and the score-to-zone classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Scores strictly below this are critical.
pub const RED_ZONE_UPPER_BOUND: f64 = 0.3;
/// Scores at or above this are nominal.
pub const GREEN_ZONE_LOWER_BOUND: f64 = 0.7;

/// Risk classification of a storage condition.
///
/// Serialized and persisted as the upper-case variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StorageZone {
    Green,
    Yellow,
    Red,
}

impl StorageZone {
    /// Variant name as stored and as shown in notification details.
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageZone::Green => "GREEN",
            StorageZone::Yellow => "YELLOW",
            StorageZone::Red => "RED",
        }
    }

    /// Human-readable meaning of the zone.
    pub const fn description(self) -> &'static str {
        match self {
            StorageZone::Green => "Standard storage conditions",
            StorageZone::Yellow => "Minor deviation",
            StorageZone::Red => "Critical conditions",
        }
    }

    pub const fn is_nominal(self) -> bool {
        matches!(self, StorageZone::Green)
    }
}

impl fmt::Display for StorageZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageZone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GREEN" => Ok(StorageZone::Green),
            "YELLOW" => Ok(StorageZone::Yellow),
            "RED" => Ok(StorageZone::Red),
            other => Err(CoreError::Internal(format!(
                "Unknown storage zone: '{other}'"
            ))),
        }
    }
}

/// Classify an environment score.
///
/// - `score < 0.3` -> `Red`
/// - `0.3 <= score < 0.7` -> `Yellow`
/// - `score >= 0.7` -> `Green`
///
/// NaN compares false against both bounds and therefore lands in `Green`.
pub fn classify_score(score: f64) -> StorageZone {
    if score < RED_ZONE_UPPER_BOUND {
        StorageZone::Red
    } else if score < GREEN_ZONE_LOWER_BOUND {
        StorageZone::Yellow
    } else {
        StorageZone::Green
    }
}
