//! Quote engine: linear price for a size and a sheet count.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::pricing::catalog::SizeOption;

/// Price breakdown for one selection. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub base_price: Decimal,
    pub sheets_cost: Decimal,
    pub total: Decimal,
}

/// `total = base_price + sheet_count * price_per_sheet`, computed exactly.
///
/// A negative `sheet_count` is treated as zero. The upper bound is not
/// enforced here; `SelectionState` owns the valid range.
pub fn compute_quote(size: &SizeOption, sheet_count: i64) -> Quote {
    let sheets = Decimal::from(sheet_count.max(0));
    let base_price = size.base_price();
    let sheets_cost = sheets * size.price_per_sheet();

    Quote {
        base_price,
        sheets_cost,
        total: base_price + sheets_cost,
    }
}

/// Two-decimal rendering used by the page and the order message (`85.00`).
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Quote with its amounts pre-formatted for display.
#[derive(Debug, Serialize)]
pub struct FormattedQuote {
    pub base_price: String,
    pub sheets_cost: String,
    pub total: String,
}

impl From<&Quote> for FormattedQuote {
    fn from(quote: &Quote) -> Self {
        Self {
            base_price: format_amount(quote.base_price),
            sheets_cost: format_amount(quote.sheets_cost),
            total: format_amount(quote.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::catalog::{catalog, find, MAX_SHEETS, MIN_SHEETS};
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_matches_formula_for_every_size_and_count() {
        for size in catalog() {
            for n in MIN_SHEETS..=MAX_SHEETS {
                let quote = compute_quote(size, n);
                let expected = size.base_price() + Decimal::from(n) * size.price_per_sheet();
                assert_eq!(quote.total, expected, "{} x {n}", size.id);
                assert_eq!(quote.base_price + quote.sheets_cost, quote.total);
            }
        }
    }

    #[test]
    fn test_monotonic_in_sheet_count() {
        for size in catalog() {
            let mut previous = compute_quote(size, MIN_SHEETS).total;
            for n in (MIN_SHEETS + 1)..=MAX_SHEETS {
                let current = compute_quote(size, n).total;
                assert!(current >= previous, "{} dropped at {n}", size.id);
                previous = current;
            }
        }
    }

    #[test]
    fn test_monotonic_across_sizes_by_coefficients() {
        // Catalog is ordered by ascending base price and per-sheet rate.
        for n in [0, 10, 24] {
            let totals: Vec<_> = catalog().iter().map(|s| compute_quote(s, n).total).collect();
            assert!(totals.windows(2).all(|w| w[0] <= w[1]), "n = {n}: {totals:?}");
        }
    }

    #[test]
    fn test_scenario_8x10_twenty_sheets() {
        let quote = compute_quote(find("8x10").unwrap(), 20);
        assert_eq!(quote.base_price, dec!(25));
        assert_eq!(quote.sheets_cost, dec!(60));
        assert_eq!(quote.total, dec!(85));
        assert_eq!(format_amount(quote.total), "85.00");
    }

    #[test]
    fn test_scenario_5x7_no_sheets() {
        let quote = compute_quote(find("5x7").unwrap(), 0);
        assert_eq!(quote.sheets_cost, Decimal::ZERO);
        assert_eq!(format_amount(quote.total), "15.00");
    }

    #[test]
    fn test_scenario_10x12_max_sheets() {
        let quote = compute_quote(find("10x12").unwrap(), 24);
        assert_eq!(quote.sheets_cost, dec!(144));
        assert_eq!(format_amount(quote.total), "189.00");
    }

    #[test]
    fn test_negative_sheet_count_treated_as_zero() {
        let size = find("6x8").unwrap();
        assert_eq!(compute_quote(size, -7), compute_quote(size, 0));
    }

    #[test]
    fn test_engine_does_not_clamp_upper_bound() {
        let quote = compute_quote(find("5x7").unwrap(), 30);
        assert_eq!(quote.total, dec!(75));
    }

    #[test]
    fn test_format_amount_half_sheet_rate() {
        // 6x8 has a 2.50 rate, so odd counts land on .50
        let quote = compute_quote(find("6x8").unwrap(), 3);
        assert_eq!(format_amount(quote.sheets_cost), "7.50");
        assert_eq!(format_amount(dec!(1.005)), "1.01");
        assert_eq!(format_amount(dec!(12)), "12.00");
    }
}
