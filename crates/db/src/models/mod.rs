//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, where the API accepts one

pub mod donor;
pub mod event_log;
pub mod material;
pub mod notification;
pub mod storage_condition;
