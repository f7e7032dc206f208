use axum::{
    extract::{Query, State},
    response::Redirect,
};
use chrono::{Datelike, Utc};
use maud::Markup;
use tracing::info;

use crate::errors::AppError;
use crate::handoff::order_link;
use crate::landing::render::{render_landing, PageContext};
use crate::pricing::SelectionState;
use crate::state::AppState;

/// Calculator parameters as they arrive from links and the slider form.
/// Kept as raw strings so malformed values fall back instead of failing.
#[derive(Debug, Default)]
pub struct PageParams {
    pub size: Option<String>,
    pub sheets: Option<String>,
}

impl PageParams {
    /// Collects `size` and `sheets` from raw query pairs. A repeated key keeps
    /// its last value, the way a form field overrides an earlier link value.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut params, (key, value)| {
                match key.as_str() {
                    "size" => params.size = Some(value),
                    "sheets" => params.sheets = Some(value),
                    _ => {}
                }
                params
            })
    }

    fn selection(&self) -> SelectionState {
        let sheets = self
            .sheets
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .map(|n| n.round() as i64);
        SelectionState::from_params(self.size.as_deref(), sheets)
    }
}

/// GET /
pub async fn handle_landing(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Markup, AppError> {
    let selection = PageParams::from_pairs(pairs).selection();
    let order_url = order_link(
        &state.config.whatsapp_phone,
        &state.config.studio_name,
        &selection,
    )?;

    let ctx = PageContext {
        studio_name: &state.config.studio_name,
        order_url: order_url.as_str(),
        year: Utc::now().year(),
    };
    Ok(render_landing(&selection, &ctx))
}

/// GET /order
///
/// Sends the browser on to WhatsApp with the quote pre-filled.
pub async fn handle_order(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Redirect, AppError> {
    let selection = PageParams::from_pairs(pairs).selection();
    let url = order_link(
        &state.config.whatsapp_phone,
        &state.config.studio_name,
        &selection,
    )?;
    info!(
        size = selection.size_id(),
        sheets = selection.sheet_count(),
        "Order handed off to WhatsApp"
    );
    Ok(Redirect::to(url.as_str()))
}
