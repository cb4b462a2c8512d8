//! DTOs for account endpoints.

use serde::Deserialize;

/// Request to set the caller's own password.
#[derive(Debug, Deserialize)]
pub struct SetPasswordRequest {
    pub password: String,
}
