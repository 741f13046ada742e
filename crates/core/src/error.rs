use crate::types::DbId;

/// Boxed error raised by a persistence collaborator.
///
/// Kept as the original error object so callers can downcast it
/// (e.g. to `sqlx::Error`) instead of parsing a message.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Storage error: {0}")]
    Storage(#[source] BoxError),
}

impl CoreError {
    /// Wrap a collaborator failure without altering it.
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CoreError::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk on fire")]
    struct DiskError;

    #[test]
    fn storage_keeps_original_error_reachable() {
        let err = CoreError::storage(DiskError);
        assert_eq!(err.to_string(), "Storage error: disk on fire");

        let source = err.source().expect("storage error has a source");
        assert!(source.downcast_ref::<DiskError>().is_some());
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "StorageCondition",
            id: 42,
        };
        assert_eq!(
            err.to_string(),
            "Entity not found: StorageCondition with id 42"
        );
    }
}
