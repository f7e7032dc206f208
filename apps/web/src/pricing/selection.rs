use serde::Serialize;
use thiserror::Error;

use crate::pricing::catalog::{
    default_size, find, SizeOption, DEFAULT_SHEETS, MAX_SHEETS, MIN_SHEETS, SHEET_STEP,
};
use crate::pricing::quote::{compute_quote, FormattedQuote, Quote};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown book size '{0}'")]
    UnknownSize(String),
}

/// The calculator state of one page session: a catalog size and a sheet count.
///
/// The size is held as a catalog reference, so the state can never point at a
/// missing entry. The sheet count is kept inside `[MIN_SHEETS, MAX_SHEETS]` on
/// even steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    size: &'static SizeOption,
    sheet_count: i64,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            size: default_size(),
            sheet_count: DEFAULT_SHEETS,
        }
    }
}

impl SelectionState {
    /// Builds a state from untrusted page parameters. Unknown sizes fall back
    /// to the default and sheet counts are clamped, never rejected.
    pub fn from_params(size_id: Option<&str>, sheets: Option<i64>) -> Self {
        let mut state = Self::default();
        if let Some(id) = size_id {
            // Unknown ids keep the default size.
            state.select_size(id).ok();
        }
        if let Some(n) = sheets {
            state.set_sheet_count(n);
        }
        state
    }

    pub fn size(&self) -> &'static SizeOption {
        self.size
    }

    pub fn size_id(&self) -> &'static str {
        self.size.id
    }

    pub fn sheet_count(&self) -> i64 {
        self.sheet_count
    }

    /// Selects a catalog size. Unknown ids leave the state untouched.
    pub fn select_size(&mut self, id: &str) -> Result<(), SelectionError> {
        let size = find(id).ok_or_else(|| SelectionError::UnknownSize(id.to_string()))?;
        self.size = size;
        Ok(())
    }

    /// Stores `n` clamped into range and snapped to the nearest step.
    pub fn set_sheet_count(&mut self, n: i64) {
        self.sheet_count = normalize_sheet_count(n);
    }

    pub fn quote(&self) -> Quote {
        compute_quote(self.size, self.sheet_count)
    }

    /// Position of the sheet count within its range, 0–100.
    pub fn slider_percent(&self) -> f64 {
        (self.sheet_count - MIN_SHEETS) as f64 / (MAX_SHEETS - MIN_SHEETS) as f64 * 100.0
    }

    pub fn view(&self) -> SelectionView {
        let quote = self.quote();
        SelectionView {
            size_id: self.size.id,
            size_label: self.size.label,
            sheet_count: self.sheet_count,
            formatted: FormattedQuote::from(&quote),
            quote,
        }
    }
}

/// Clamp first, then round to the nearest multiple of `SHEET_STEP` counted
/// from `MIN_SHEETS`; ties go up. Both bounds sit on a step, so the result
/// stays in range.
fn normalize_sheet_count(n: i64) -> i64 {
    let offset = n.clamp(MIN_SHEETS, MAX_SHEETS) - MIN_SHEETS;
    let snapped = (offset + SHEET_STEP / 2) / SHEET_STEP * SHEET_STEP;
    (MIN_SHEETS + snapped).min(MAX_SHEETS)
}

#[derive(Debug, Serialize)]
pub struct SelectionView {
    pub size_id: &'static str,
    pub size_label: &'static str,
    pub sheet_count: i64,
    pub quote: Quote,
    pub formatted: FormattedQuote,
}
