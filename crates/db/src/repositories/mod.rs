//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod donor_repo;
pub mod event_log_repo;
pub mod material_repo;
pub mod notification_repo;
pub mod storage_condition_repo;

pub use donor_repo::DonorRepo;
pub use event_log_repo::EventLogRepo;
pub use material_repo::MaterialRepo;
pub use notification_repo::NotificationRepo;
pub use storage_condition_repo::StorageConditionRepo;
