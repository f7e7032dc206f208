//! Axum route handlers for calculator sessions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::handoff::order_link;
use crate::pricing::selection::SelectionView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SelectSizeRequest {
    pub size_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SetSheetsRequest {
    pub sheet_count: i64,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub selection: SelectionView,
}

#[derive(Debug, Serialize)]
pub struct OrderLinkResponse {
    pub session_id: Uuid,
    pub url: String,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let (session_id, selection) = state.sessions.create();
    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            selection: selection.view(),
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let selection = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(SessionResponse {
        session_id: id,
        selection: selection.view(),
    }))
}

/// PUT /api/v1/sessions/:id/size
///
/// Unknown size ids are rejected and the session keeps its previous size.
pub async fn handle_select_size(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectSizeRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let (result, selection) = state
        .sessions
        .update(id, |s| s.select_size(&req.size_id))
        .ok_or_else(|| session_not_found(id))?;
    result?;

    Ok(Json(SessionResponse {
        session_id: id,
        selection: selection.view(),
    }))
}

/// PUT /api/v1/sessions/:id/sheets
///
/// Out-of-range and odd counts are normalized, never rejected.
pub async fn handle_set_sheets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetSheetsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let ((), selection) = state
        .sessions
        .update(id, |s| s.set_sheet_count(req.sheet_count))
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(SessionResponse {
        session_id: id,
        selection: selection.view(),
    }))
}

/// GET /api/v1/sessions/:id/order
pub async fn handle_session_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderLinkResponse>, AppError> {
    let selection = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    let url = order_link(
        &state.config.whatsapp_phone,
        &state.config.studio_name,
        &selection,
    )?;

    Ok(Json(OrderLinkResponse {
        session_id: id,
        url: url.into(),
    }))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id) {
        return Err(session_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
