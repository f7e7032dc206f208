//! Book size catalog — the fixed, ordered set of sizes the studio prints.
//!
//! Prices are stored in cents so the table stays a plain `static`; they are
//! lifted into `Decimal` (scale 2) on access.

use rust_decimal::Decimal;
use serde::Serialize;

pub const MIN_SHEETS: i64 = 0;
pub const MAX_SHEETS: i64 = 24;
pub const SHEET_STEP: i64 = 2;
pub const DEFAULT_SHEETS: i64 = 20;

/// Photos covered by the base price of every size.
pub const BASE_INCLUDED_PHOTOS: u32 = 12;
pub const PHOTOS_PER_SHEET: u32 = 2;

const DEFAULT_SIZE_ID: &str = "8x10";

#[derive(Debug, PartialEq, Eq)]
pub struct SizeOption {
    pub id: &'static str,
    pub label: &'static str,
    /// Width in inches.
    pub width: u32,
    /// Height in inches.
    pub height: u32,
    base_price_cents: i64,
    price_per_sheet_cents: i64,
}

impl SizeOption {
    const fn new(
        id: &'static str,
        label: &'static str,
        width: u32,
        height: u32,
        base_price_cents: i64,
        price_per_sheet_cents: i64,
    ) -> Self {
        Self {
            id,
            label,
            width,
            height,
            base_price_cents,
            price_per_sheet_cents,
        }
    }

    pub fn base_price(&self) -> Decimal {
        Decimal::new(self.base_price_cents, 2)
    }

    pub fn price_per_sheet(&self) -> Decimal {
        Decimal::new(self.price_per_sheet_cents, 2)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Pixel box for the size-card preview: `scale` px per inch, with the
    /// height capped at `max_height` and the width shrunk to keep proportions.
    pub fn preview_px(&self, scale: u32, max_height: u32) -> (u32, u32) {
        let height = (self.height * scale).min(max_height);
        let width = (height as f64 * self.aspect_ratio()).round() as u32;
        (width, height)
    }
}

static CATALOG: [SizeOption; 5] = [
    SizeOption::new("5x7", "5 x 7\"", 5, 7, 1500, 200),
    SizeOption::new("6x8", "6 x 8\"", 6, 8, 1800, 250),
    SizeOption::new("8x10", "8 x 10\"", 8, 10, 2500, 300),
    SizeOption::new("8x12", "8 x 12\"", 8, 12, 3500, 450),
    SizeOption::new("10x12", "10 x 12\"", 10, 12, 4500, 600),
];

pub fn catalog() -> &'static [SizeOption] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static SizeOption> {
    CATALOG.iter().find(|size| size.id == id)
}

pub fn default_size() -> &'static SizeOption {
    find(DEFAULT_SIZE_ID).unwrap_or(&CATALOG[0])
}

/// Wire shape of a catalog entry for the JSON API.
#[derive(Debug, Serialize)]
pub struct SizeOptionView {
    pub id: &'static str,
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
    pub base_price: Decimal,
    pub price_per_sheet: Decimal,
}

impl From<&SizeOption> for SizeOptionView {
    fn from(size: &SizeOption) -> Self {
        Self {
            id: size.id,
            label: size.label,
            width: size.width,
            height: size.height,
            base_price: size.base_price(),
            price_per_sheet: size.price_per_sheet(),
        }
    }
}
