//! HTTP handlers for tally endpoints.

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
    GetTallyHandler, GetTallyQuery, RecordEntryCommand, RecordEntryHandler,
};
use crate::domain::tally::{DrinkKind, DrinkSize};

use super::dto::{RecordEntryRequest, RecordEntryResponse, TallyCountsDto};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TallyHandlers {
    record_handler: Arc<RecordEntryHandler>,
    get_tally_handler: Arc<GetTallyHandler>,
}

impl TallyHandlers {
    pub fn new(record_handler: Arc<RecordEntryHandler>, get_tally_handler: Arc<GetTallyHandler>) -> Self {
        Self {
            record_handler,
            get_tally_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/tally/entries - Record one drink
pub async fn record_entry(
    State(handlers): State<TallyHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RecordEntryRequest>,
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

    let cmd = RecordEntryCommand {
        user_id: user.id,
        kind,
        size,
    };

    match handlers.record_handler.handle(cmd).await {
        Ok(result) => {
            let response = RecordEntryResponse {
                entry_id: result.entry_id,
                counts: result.counts.into(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/tally - The caller's own counts
pub async fn get_tally(
    State(handlers): State<TallyHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetTallyQuery { user_id: user.id };

    match handlers.get_tally_handler.handle(query).await {
        Ok(counts) => {
            let response: TallyCountsDto = counts.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
