// Photobook pricing: size catalog, quote engine, and the calculator selection state.
// Quotes are derived from a selection on every read and never cached.

pub mod catalog;
pub mod handlers;
pub mod quote;
pub mod selection;

pub use quote::format_amount;
pub use selection::{SelectionError, SelectionState};
