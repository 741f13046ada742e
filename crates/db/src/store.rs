//! PostgreSQL adapter for the condition service collaborators.

use async_trait::async_trait;
use biostore_core::condition::{MaterialProfile, NewStorageCondition, StorageCondition};
use biostore_core::error::CoreError;
use biostore_core::hazard::NewNotification;
use biostore_core::ports::{AuditSink, ConditionStore, MaterialLookup, NotificationSink};
use biostore_core::types::DbId;

use crate::repositories::{EventLogRepo, MaterialRepo, NotificationRepo, StorageConditionRepo};
use crate::DbPool;

/// Implements every storage port of
/// [`ConditionService`](biostore_core::condition_service::ConditionService)
/// on top of the repositories. Each call runs on its own pooled connection.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaterialLookup for PgStore {
    async fn find_profile(&self, material_id: DbId) -> Result<Option<MaterialProfile>, CoreError> {
        let material = MaterialRepo::find_by_id(&self.pool, material_id)
            .await
            .map_err(CoreError::storage)?;
        Ok(material.as_ref().map(MaterialProfile::from))
    }
}

#[async_trait]
impl ConditionStore for PgStore {
    async fn insert(&self, condition: &NewStorageCondition) -> Result<StorageCondition, CoreError> {
        StorageConditionRepo::create(&self.pool, condition)
            .await
            .map_err(CoreError::storage)?
            .try_into()
    }

    async fn update(
        &self,
        condition: &StorageCondition,
    ) -> Result<Option<StorageCondition>, CoreError> {
        StorageConditionRepo::update(&self.pool, condition)
            .await
            .map_err(CoreError::storage)?
            .map(StorageCondition::try_from)
            .transpose()
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<StorageCondition>, CoreError> {
        StorageConditionRepo::find_by_id(&self.pool, id)
            .await
            .map_err(CoreError::storage)?
            .map(StorageCondition::try_from)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<StorageCondition>, CoreError> {
        StorageConditionRepo::list(&self.pool)
            .await
            .map_err(CoreError::storage)?
            .into_iter()
            .map(StorageCondition::try_from)
            .collect()
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        StorageConditionRepo::delete(&self.pool, id)
            .await
            .map_err(CoreError::storage)
    }
}

#[async_trait]
impl NotificationSink for PgStore {
    async fn save(&self, notification: &NewNotification) -> Result<DbId, CoreError> {
        NotificationRepo::create(&self.pool, notification)
            .await
            .map_err(CoreError::storage)
    }
}

#[async_trait]
impl AuditSink for PgStore {
    async fn append(&self, actor: Option<DbId>, message: &str) -> Result<(), CoreError> {
        let id = EventLogRepo::create(&self.pool, actor, message)
            .await
            .map_err(CoreError::storage)?;
        tracing::debug!(event_log_id = id, user_id = ?actor, "Event log entry appended");
        Ok(())
    }
}
