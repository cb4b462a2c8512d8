//! HTTP routes for account endpoints.

use axum::{routing::post, Router};

use super::handlers::{set_password, AccountHandlers};

/// Creates the account router with all endpoints.
pub fn account_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route("/password", post(set_password))
        .with_state(handlers)
}
