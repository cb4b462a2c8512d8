//! HTTP routes for tally endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_tally, record_entry, TallyHandlers};

/// Creates the tally router with all endpoints.
pub fn tally_routes(handlers: TallyHandlers) -> Router {
    Router::new()
        .route("/", get(get_tally))
        .route("/entries", post(record_entry))
        .with_state(handlers)
}
