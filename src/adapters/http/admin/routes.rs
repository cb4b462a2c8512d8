//! HTTP routes for admin endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    change_role, delete_user, get_overview, invite_user, list_users, remove_entry, reset_entries,
    AdminHandlers,
};

/// Creates the admin router with all endpoints.
pub fn admin_routes(handlers: AdminHandlers) -> Router {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/entries/remove", post(remove_entry))
        .route("/entries/reset", post(reset_entries))
        .route("/users", get(list_users))
        .route("/users/invite", post(invite_user))
        .route("/users/delete", post(delete_user))
        .route("/users/role", post(change_role))
        .with_state(handlers)
}
