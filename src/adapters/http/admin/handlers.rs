//! HTTP handlers for admin endpoints.
//!
//! Every handler passes the caller's id into the application layer, which
//! re-reads the caller's profile row to decide whether they are an admin.
//! Nothing here trusts the token for authorization.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::tally::{
    GetOverviewHandler, GetOverviewQuery, RemoveEntryCommand, RemoveEntryHandler,
    ResetEntriesCommand, ResetEntriesHandler,
};
use crate::application::handlers::user::{
    ChangeRoleCommand, ChangeRoleHandler, DeleteUserCommand, DeleteUserHandler, InviteUserCommand,
    InviteUserHandler, ListProfilesHandler, ListProfilesQuery,
};
use crate::domain::tally::{DrinkKind, DrinkSize};

use super::dto::{
    ChangeRoleRequest, DeleteUserRequest, DeleteUserResponse, InviteUserRequest,
    InviteUserResponse, OverviewResponse, ProfileDto, RemoveEntryRequest, RemoveEntryResponse,
    ResetEntriesResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdminHandlers {
    overview_handler: Arc<GetOverviewHandler>,
    remove_handler: Arc<RemoveEntryHandler>,
    reset_handler: Arc<ResetEntriesHandler>,
    list_profiles_handler: Arc<ListProfilesHandler>,
    invite_handler: Arc<InviteUserHandler>,
    delete_user_handler: Arc<DeleteUserHandler>,
    change_role_handler: Arc<ChangeRoleHandler>,
}

impl AdminHandlers {
    pub fn new(
        overview_handler: Arc<GetOverviewHandler>,
        remove_handler: Arc<RemoveEntryHandler>,
        reset_handler: Arc<ResetEntriesHandler>,
        list_profiles_handler: Arc<ListProfilesHandler>,
        invite_handler: Arc<InviteUserHandler>,
        delete_user_handler: Arc<DeleteUserHandler>,
        change_role_handler: Arc<ChangeRoleHandler>,
    ) -> Self {
        Self {
            overview_handler,
            remove_handler,
            reset_handler,
            list_profiles_handler,
            invite_handler,
            delete_user_handler,
            change_role_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/overview - Per-user counts plus grand totals
pub async fn get_overview(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetOverviewQuery { caller_id: user.id };

    match handlers.overview_handler.handle(query).await {
        Ok(view) => {
            let response: OverviewResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/admin/entries/remove - Subtract the newest matching entry
pub async fn remove_entry(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RemoveEntryRequest>,
) -> Response {
    let Some(kind) = DrinkKind::parse(&req.kind) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Unknown drink kind: {}",
                req.kind
            ))),
        )
            .into_response();
    };
    let Some(size) = DrinkSize::parse(&req.size) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Unknown drink size: {}",
                req.size
            ))),
        )
            .into_response();
    };

    let cmd = RemoveEntryCommand {
        caller_id: user.id,
        user_id: req.user_id,
        kind,
        size,
    };

    match handlers.remove_handler.handle(cmd).await {
        Ok(result) => {
            let response = RemoveEntryResponse {
                removed: result.removed,
                counts: result.counts.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/admin/entries/reset - Delete every entry for every user
pub async fn reset_entries(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let cmd = ResetEntriesCommand { caller_id: user.id };

    match handlers.reset_handler.handle(cmd).await {
        Ok(result) => {
            let response = ResetEntriesResponse {
                deleted: result.deleted,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/admin/users - List every profile
pub async fn list_users(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListProfilesQuery { caller_id: user.id };

    match handlers.list_profiles_handler.handle(query).await {
        Ok(profiles) => {
            let response: Vec<ProfileDto> = profiles.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/admin/users/invite - Invite a new user by email
pub async fn invite_user(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<InviteUserRequest>,
) -> Response {
    let cmd = InviteUserCommand {
        caller_id: user.id,
        email: req.email,
        role: req.role,
    };

    match handlers.invite_handler.handle(cmd).await {
        Ok(result) => {
            let response = InviteUserResponse {
                user_id: result.user_id,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/admin/users/delete - Delete a user and everything they own
pub async fn delete_user(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<DeleteUserRequest>,
) -> Response {
    let cmd = DeleteUserCommand {
        caller_id: user.id,
        user_id: req.user_id,
    };

    match handlers.delete_user_handler.handle(cmd).await {
        Ok(result) => {
            let response = DeleteUserResponse {
                entries_deleted: result.entries_deleted,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/admin/users/role - Change a user's role
pub async fn change_role(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<ChangeRoleRequest>,
) -> Response {
    let cmd = ChangeRoleCommand {
        caller_id: user.id,
        user_id: req.user_id,
        role: req.role,
    };

    match handlers.change_role_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
