use std::sync::Arc;

use biostore_core::condition_service::ConditionService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (material, notification and event log reads).
    pub pool: biostore_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Storage condition orchestrator.
    pub conditions: Arc<ConditionService>,
}
