//! Audit message formatting for storage condition, material and donor
//! changes.
//!
//! Produces the single-line text appended to the event log. Performs no I/O.

use std::fmt;

use crate::condition::StorageCondition;
use crate::types::DbId;

/// Creator token used for readings submitted by unattended devices.
pub const DEVICE_CREATOR: &str = "IOT";

/// The kind of change being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    /// Label embedded in the creator text. The trailing space is part of the
    /// stored message format.
    pub const fn label(self) -> &'static str {
        match self {
            AuditAction::Create => "Add new ",
            AuditAction::Update => "Update ",
            AuditAction::Delete => "Delete ",
        }
    }
}

/// Who caused an audited change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Creator {
    /// An authenticated user acting through the API.
    User { user_id: DbId, action: AuditAction },
    /// A sensor device with no actor attached.
    Device,
}

impl Creator {
    /// Actor id to attach to the audit entry, absent for devices.
    pub fn actor_id(&self) -> Option<DbId> {
        match self {
            Creator::User { user_id, .. } => Some(*user_id),
            Creator::Device => None,
        }
    }
}

impl fmt::Display for Creator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Creator::User { user_id, action } => {
                write!(f, "User with ID {user_id}. {}", action.label())
            }
            Creator::Device => f.write_str(DEVICE_CREATOR),
        }
    }
}

/// Describe a storage condition change for the event log.
///
/// Numbers are rendered with two decimals, rounding half up:
///
/// ```text
/// storage condition by <creator> and material with ID: <id> | Zone: <ZONE>, Oxygen Level: <o>%, Humidity: <h>%, Temperature: <t>°C
/// ```
pub fn condition_message(creator: &Creator, condition: &StorageCondition) -> String {
    format!(
        "storage condition by {creator} and material with ID: {} | \
         Zone: {}, Oxygen Level: {}%, Humidity: {}%, Temperature: {}°C",
        condition.material_id,
        condition.zone,
        two_decimals(condition.oxygen_level),
        two_decimals(condition.humidity),
        two_decimals(condition.temperature),
    )
}

/// Describe a biological material change for the event log.
pub fn material_message(
    creator: &Creator,
    material_id: DbId,
    material_name: &str,
    status: &str,
) -> String {
    format!(
        "biological material by {creator} with ID: {material_id} | \
         Name: {material_name}, Status: {status}"
    )
}

/// Describe a donor change for the event log.
pub fn donor_message(
    creator: &Creator,
    donor_id: DbId,
    first_name: &str,
    last_name: &str,
) -> String {
    format!("donor by {creator} with ID: {donor_id} | Name: {first_name} {last_name}")
}

/// Render `value` with exactly two decimals, rounding half up.
///
/// Rounding starts from the shortest decimal form of the value, so `4.125`
/// becomes `4.13` even though its binary value sits slightly below the tie.
pub fn two_decimals(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    // Integer digits followed by the first two fraction digits.
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{}", render(&digits[..split]), render(&digits[split..]))
}
