//! Storage condition ingestion, update and removal.
//!
//! [`ConditionService`] sequences material lookup, scoring, zoning,
//! persistence, hazard notification and audit logging for one request. Each
//! call runs to completion before returning and takes no locks, so concurrent
//! updates of the same condition are last-writer-wins.
//!
//! The write sequence (condition, then notification, then audit entry) is not
//! atomic: if a later write fails the earlier ones stay committed and the
//! error is returned to the caller unchanged.

use std::sync::Arc;

use crate::audit::{condition_message, AuditAction, Creator};
use crate::condition::{NewStorageCondition, Reading, StorageCondition};
use crate::environment::environment_score;
use crate::error::CoreError;
use crate::hazard::hazard_notification;
use crate::ports::{AuditSink, Clock, ConditionStore, MaterialLookup, NotificationSink};
use crate::types::{DbId, Timestamp};
use crate::zone::{classify_score, StorageZone};

/// Entity name reported when a condition id does not resolve.
pub const CONDITION_ENTITY: &str = "StorageCondition";
/// Entity name reported when a material id does not resolve.
pub const MATERIAL_ENTITY: &str = "BiologicalMaterial";

/// Outcome of scoring a reading against its material.
#[derive(Debug, Clone, Copy)]
struct Evaluation {
    zone: StorageZone,
    measured_at: Timestamp,
}

pub struct ConditionService {
    materials: Arc<dyn MaterialLookup>,
    conditions: Arc<dyn ConditionStore>,
    notifications: Arc<dyn NotificationSink>,
    audit: Arc<dyn AuditSink>,
    clock: Arc<dyn Clock>,
}

impl ConditionService {
    pub fn new(
        materials: Arc<dyn MaterialLookup>,
        conditions: Arc<dyn ConditionStore>,
        notifications: Arc<dyn NotificationSink>,
        audit: Arc<dyn AuditSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            materials,
            conditions,
            notifications,
            audit,
            clock,
        }
    }

    /// Wire every collaborator to a single adapter.
    pub fn with_store<S>(store: Arc<S>, clock: Arc<dyn Clock>) -> Self
    where
        S: MaterialLookup + ConditionStore + NotificationSink + AuditSink + 'static,
    {
        Self::new(store.clone(), store.clone(), store.clone(), store, clock)
    }

    /// Ingest a new reading.
    ///
    /// `actor` is the authenticated user, or `None` for a device submission.
    /// Fails with `NotFound` before any write if the material does not exist.
    pub async fn create_condition(
        &self,
        actor: Option<DbId>,
        reading: &Reading,
    ) -> Result<StorageCondition, CoreError> {
        let creator = match actor {
            Some(user_id) => Creator::User {
                user_id,
                action: AuditAction::Create,
            },
            None => Creator::Device,
        };

        let evaluation = self.evaluate(reading).await?;
        let condition = self
            .conditions
            .insert(&NewStorageCondition {
                material_id: reading.material_id,
                temperature: reading.temperature,
                humidity: reading.humidity,
                oxygen_level: reading.oxygen_level,
                measurement_time: evaluation.measured_at,
                zone: evaluation.zone,
            })
            .await?;

        self.raise_hazard(&condition).await?;
        self.record(&creator, &condition).await?;

        tracing::info!(
            condition_id = condition.id,
            material_id = condition.material_id,
            zone = %condition.zone,
            user_id = ?actor,
            "Storage condition created"
        );
        Ok(condition)
    }

    /// Replace the measured values and material of an existing condition and
    /// re-derive its zone. The previous zone is discarded.
    pub async fn update_condition(
        &self,
        actor: DbId,
        id: DbId,
        reading: &Reading,
    ) -> Result<StorageCondition, CoreError> {
        let mut condition = self.get_condition_by_id(id).await?;
        condition.apply_reading(reading);

        let evaluation = self.evaluate(reading).await?;
        condition.zone = evaluation.zone;
        condition.measurement_time = evaluation.measured_at;

        let condition = self
            .conditions
            .update(&condition)
            .await?
            .ok_or(CoreError::NotFound {
                entity: CONDITION_ENTITY,
                id,
            })?;

        self.raise_hazard(&condition).await?;
        self.record(
            &Creator::User {
                user_id: actor,
                action: AuditAction::Update,
            },
            &condition,
        )
        .await?;

        tracing::info!(
            condition_id = condition.id,
            material_id = condition.material_id,
            zone = %condition.zone,
            user_id = actor,
            "Storage condition updated"
        );
        Ok(condition)
    }

    /// Remove a condition. The audit entry describes the record as it was
    /// before removal. Notifications it raised are kept.
    pub async fn delete_condition(&self, actor: DbId, id: DbId) -> Result<(), CoreError> {
        let condition = self.get_condition_by_id(id).await?;
        let message = condition_message(
            &Creator::User {
                user_id: actor,
                action: AuditAction::Delete,
            },
            &condition,
        );

        if !self.conditions.delete_by_id(id).await? {
            return Err(CoreError::NotFound {
                entity: CONDITION_ENTITY,
                id,
            });
        }
        self.audit.append(Some(actor), &message).await?;

        tracing::info!(condition_id = id, user_id = actor, "Storage condition deleted");
        Ok(())
    }

    pub async fn get_condition_by_id(&self, id: DbId) -> Result<StorageCondition, CoreError> {
        self.conditions
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: CONDITION_ENTITY,
                id,
            })
    }

    /// Every stored condition, unpaginated, in store order.
    pub async fn get_all_conditions(&self) -> Result<Vec<StorageCondition>, CoreError> {
        self.conditions.find_all().await
    }

    async fn evaluate(&self, reading: &Reading) -> Result<Evaluation, CoreError> {
        let profile = self
            .materials
            .find_profile(reading.material_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: MATERIAL_ENTITY,
                id: reading.material_id,
            })?;

        let score = environment_score(reading, &profile);
        let zone = classify_score(score);
        tracing::debug!(material_id = profile.id, score, zone = %zone, "Reading evaluated");

        Ok(Evaluation {
            zone,
            measured_at: self.clock.now(),
        })
    }

    async fn raise_hazard(&self, condition: &StorageCondition) -> Result<(), CoreError> {
        let Some(notification) = hazard_notification(
            condition.zone,
            condition.material_id,
            condition.measurement_time,
        ) else {
            return Ok(());
        };

        let notification_id = self.notifications.save(&notification).await?;
        tracing::warn!(
            notification_id,
            condition_id = condition.id,
            material_id = condition.material_id,
            zone = %condition.zone,
            "Hazardous storage conditions"
        );
        Ok(())
    }

    async fn record(&self, creator: &Creator, condition: &StorageCondition) -> Result<(), CoreError> {
        let message = condition_message(creator, condition);
        self.audit.append(creator.actor_id(), &message).await
    }
}
