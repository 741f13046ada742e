//! Collaborator traits consumed by [`crate::condition_service::ConditionService`].
//!
//! Storage adapters implement these; the service never touches a concrete
//! database. Failures from an adapter are reported as
//! [`CoreError::Storage`] with the original error boxed inside.

use async_trait::async_trait;

use crate::condition::{MaterialProfile, NewStorageCondition, StorageCondition};
use crate::error::CoreError;
use crate::hazard::NewNotification;
use crate::types::{DbId, Timestamp};

/// Read access to material preservation profiles.
#[async_trait]
pub trait MaterialLookup: Send + Sync {
    /// Returns `None` when no material has this id.
    async fn find_profile(&self, material_id: DbId) -> Result<Option<MaterialProfile>, CoreError>;
}

/// Persistence for storage conditions.
#[async_trait]
pub trait ConditionStore: Send + Sync {
    async fn insert(&self, condition: &NewStorageCondition) -> Result<StorageCondition, CoreError>;

    /// Overwrite the row with `condition.id`. Returns `None` if it no longer
    /// exists.
    async fn update(
        &self,
        condition: &StorageCondition,
    ) -> Result<Option<StorageCondition>, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<StorageCondition>, CoreError>;

    /// All conditions, in whatever order the store yields them.
    async fn find_all(&self) -> Result<Vec<StorageCondition>, CoreError>;

    /// Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError>;
}

/// Persistence for hazard notifications.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Store a notification, returning its generated id.
    async fn save(&self, notification: &NewNotification) -> Result<DbId, CoreError>;
}

/// Append-only event log.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// `actor` is `None` for device-originated events.
    async fn append(&self, actor: Option<DbId>, message: &str) -> Result<(), CoreError>;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
