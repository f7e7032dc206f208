//! Axum route handlers for the stateless pricing API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::handoff::order_link;
use crate::pricing::catalog::{
    catalog, default_size, SizeOptionView, BASE_INCLUDED_PHOTOS, DEFAULT_SHEETS, MAX_SHEETS,
    MIN_SHEETS, PHOTOS_PER_SHEET, SHEET_STEP,
};
use crate::pricing::selection::{SelectionState, SelectionView};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SheetBounds {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub sizes: Vec<SizeOptionView>,
    pub default_size_id: &'static str,
    pub sheets: SheetBounds,
    pub base_included_photos: u32,
    pub photos_per_sheet: u32,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub size_id: String,
    pub sheet_count: i64,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub selection: SelectionView,
    pub order_url: String,
}

/// GET /api/v1/catalog
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        sizes: catalog().iter().map(SizeOptionView::from).collect(),
        default_size_id: default_size().id,
        sheets: SheetBounds {
            min: MIN_SHEETS,
            max: MAX_SHEETS,
            step: SHEET_STEP,
            default: DEFAULT_SHEETS,
        },
        base_included_photos: BASE_INCLUDED_PHOTOS,
        photos_per_sheet: PHOTOS_PER_SHEET,
    })
}

/// POST /api/v1/quote
///
/// Quotes a selection without opening a session. The sheet count is normalized
/// the same way the calculator does; an unknown size is a validation error.
pub async fn handle_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let mut selection = SelectionState::default();
    selection.select_size(&req.size_id)?;
    selection.set_sheet_count(req.sheet_count);

    let order_url = order_link(
        &state.config.whatsapp_phone,
        &state.config.studio_name,
        &selection,
    )?;

    Ok(Json(QuoteResponse {
        selection: selection.view(),
        order_url: order_url.into(),
    }))
}
