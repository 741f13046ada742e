use axum::routing::get;
use axum::Router;

use crate::handlers::event_log;
use crate::state::AppState;

/// Routes mounted at `/event-logs`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(event_log::list))
}
