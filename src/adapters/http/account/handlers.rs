//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::user::{SetPasswordCommand, SetPasswordHandler};

use super::dto::SetPasswordRequest;

#[derive(Clone)]
pub struct AccountHandlers {
    set_password_handler: Arc<SetPasswordHandler>,
}

impl AccountHandlers {
    pub fn new(set_password_handler: Arc<SetPasswordHandler>) -> Self {
        Self {
            set_password_handler,
        }
    }
}

/// POST /api/account/password - Set the caller's own password
pub async fn set_password(
    State(handlers): State<AccountHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SetPasswordRequest>,
) -> Response {
    let cmd = SetPasswordCommand {
        user_id: user.id,
        password: req.password,
    };

    match handlers.set_password_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
