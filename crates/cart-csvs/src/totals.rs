use crate::records::LineItem;
use rust_decimal::prelude::*;
use tracing::warn;

/// Sum of `price * quantity` over `items`, unrounded.
///
/// Prices and quantities held as numeric text count. An item whose price or
/// quantity is missing or not numeric contributes nothing.
pub fn calc_total(items: &[LineItem]) -> f64 {
    items
        .iter()
        .filter_map(|item| match (item.price(), item.quantity()) {
            (Some(price), Some(quantity)) => Some(price * quantity),
            _ => {
                warn!(id = %item.id, "skipping line item without numeric price and quantity");
                None
            }
        })
        .sum()
}

/// Round a money amount to 2 decimal places, halves away from zero
pub fn round_total(total: f64) -> f64 {
    Decimal::from_f64(total)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(total)
}
