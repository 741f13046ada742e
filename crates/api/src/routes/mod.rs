pub mod device;
pub mod donor;
pub mod event_log;
pub mod health;
pub mod material;
pub mod notification;
pub mod storage_condition;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /storage-conditions                  list, create (create requires auth)
/// /storage-conditions/{id}             get, update, delete (writes require auth)
///
/// /devices/storage-conditions          device submission (POST, no auth)
///
/// /materials                           list, create (create requires auth)
/// /materials/{id}                      get, update, delete (writes require auth)
/// /materials/{id}/notifications        hazard notifications for one material
///
/// /donors                              list, create (create requires auth)
/// /donors/{id}                         get, update, delete (writes require auth)
/// /donors/{id}/materials               materials donated by one donor
///
/// /notifications                       all hazard notifications
///
/// /event-logs                          audit log, newest first (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/storage-conditions", storage_condition::router())
        .nest("/devices", device::router())
        .nest("/materials", material::router())
        .nest("/donors", donor::router())
        .nest("/notifications", notification::router())
        .nest("/event-logs", event_log::router())
}
