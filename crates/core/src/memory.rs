//! In-process implementation of every collaborator trait.
//!
//! Backs the condition service in tests and in tooling that has no database.
//! Ids are assigned sequentially starting at 1.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::condition::{MaterialProfile, NewStorageCondition, StorageCondition};
use crate::error::CoreError;
use crate::hazard::NewNotification;
use crate::ports::{AuditSink, ConditionStore, MaterialLookup, NotificationSink};
use crate::types::DbId;

/// An appended event log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub actor: Option<DbId>,
    pub message: String,
}

#[derive(Debug, Default)]
struct Inner {
    materials: BTreeMap<DbId, MaterialProfile>,
    conditions: BTreeMap<DbId, StorageCondition>,
    notifications: Vec<(DbId, NewNotification)>,
    audit: Vec<AuditEntry>,
    last_condition_id: DbId,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register (or replace) a material profile.
    pub fn insert_material(&self, profile: MaterialProfile) {
        self.lock().materials.insert(profile.id, profile);
    }

    /// Snapshot of stored notifications in insertion order.
    pub fn notifications(&self) -> Vec<NewNotification> {
        self.lock()
            .notifications
            .iter()
            .map(|(_, n)| n.clone())
            .collect()
    }

    /// Snapshot of the event log in append order.
    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.lock().audit.clone()
    }

    pub fn condition_count(&self) -> usize {
        self.lock().conditions.len()
    }
}

#[async_trait]
impl MaterialLookup for InMemoryStore {
    async fn find_profile(&self, material_id: DbId) -> Result<Option<MaterialProfile>, CoreError> {
        Ok(self.lock().materials.get(&material_id).copied())
    }
}

#[async_trait]
impl ConditionStore for InMemoryStore {
    async fn insert(&self, condition: &NewStorageCondition) -> Result<StorageCondition, CoreError> {
        let mut inner = self.lock();
        inner.last_condition_id += 1;
        let stored = StorageCondition {
            id: inner.last_condition_id,
            material_id: condition.material_id,
            temperature: condition.temperature,
            humidity: condition.humidity,
            oxygen_level: condition.oxygen_level,
            measurement_time: condition.measurement_time,
            zone: condition.zone,
        };
        inner.conditions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        condition: &StorageCondition,
    ) -> Result<Option<StorageCondition>, CoreError> {
        let mut inner = self.lock();
        match inner.conditions.get_mut(&condition.id) {
            Some(slot) => {
                *slot = condition.clone();
                Ok(Some(condition.clone()))
            }
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<StorageCondition>, CoreError> {
        Ok(self.lock().conditions.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<StorageCondition>, CoreError> {
        Ok(self.lock().conditions.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        Ok(self.lock().conditions.remove(&id).is_some())
    }
}

#[async_trait]
impl NotificationSink for InMemoryStore {
    async fn save(&self, notification: &NewNotification) -> Result<DbId, CoreError> {
        let mut inner = self.lock();
        let id = inner.notifications.len() as DbId + 1;
        inner.notifications.push((id, notification.clone()));
        Ok(id)
    }
}

#[async_trait]
impl AuditSink for InMemoryStore {
    async fn append(&self, actor: Option<DbId>, message: &str) -> Result<(), CoreError> {
        self.lock().audit.push(AuditEntry {
            actor,
            message: message.to_string(),
        });
        Ok(())
    }
}
