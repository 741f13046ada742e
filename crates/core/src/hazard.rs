//! Hazard notification trigger.
//!
//! Every non-nominal evaluation yields exactly one notification. There is no
//! deduplication or rate limiting: a material that keeps reporting outside its
//! profile produces one notification per reading.

use crate::types::{DbId, Timestamp};
use crate::zone::StorageZone;

/// Event type label attached to every hazard notification.
pub const HAZARDOUS_EVENT_TYPE: &str = "Hazardous storage conditions";

/// A hazard notification that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub material_id: DbId,
    pub event_type: String,
    pub details: String,
    pub notification_time: Timestamp,
}

/// Details text naming the zone, e.g. `"Material in the zone: RED"`.
pub fn zone_details(zone: StorageZone) -> String {
    format!("Material in the zone: {zone}")
}

/// Build the notification for a zoned reading, or `None` when the zone is
/// nominal.
pub fn hazard_notification(
    zone: StorageZone,
    material_id: DbId,
    at: Timestamp,
) -> Option<NewNotification> {
    if zone.is_nominal() {
        return None;
    }
    Some(NewNotification {
        material_id,
        event_type: HAZARDOUS_EVENT_TYPE.to_string(),
        details: zone_details(zone),
        notification_time: at,
    })
}
