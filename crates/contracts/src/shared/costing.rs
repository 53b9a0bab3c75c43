//! Part and order cost arithmetic.
//!
//! Every persisted cost column (part material/print/base cost, suggested
//! price, order subtotal/markup/total) is derived through this module.

use serde::{Deserialize, Serialize};

/// Markup percent is accepted from forms but never outside this range.
pub const MIN_MARKUP_PERCENT: f64 = 0.0;
pub const MAX_MARKUP_PERCENT: f64 = 500.0;

/// Hourly rate used when the printer fleet is empty.
pub const FALLBACK_HOURLY_RATE: f64 = 100.0;

/// Inputs of a single-part cost calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CostInput {
    pub weight_grams: f64,
    pub print_time_minutes: f64,
    pub material_cost_per_gram: f64,
    pub printer_hourly_rate: f64,
}

/// Result of a single-part cost calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material_cost: f64,
    pub print_cost: f64,
    pub base_cost: f64,
}

impl CostBreakdown {
    /// Price for a given markup percent (clamped to the allowed range)
    pub fn suggested_price(&self, markup_percent: f64) -> f64 {
        self.base_cost * (1.0 + clamp_markup(markup_percent) / 100.0)
    }
}

/// Totals of an order over its line items
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub markup: f64,
    pub total: f64,
}

/// Clamp a markup percent into `[0, 500]`.
pub fn clamp_markup(markup_percent: f64) -> f64 {
    markup_percent.clamp(MIN_MARKUP_PERCENT, MAX_MARKUP_PERCENT)
}

/// Compute the cost breakdown of a part.
///
/// ```
/// use contracts::shared::costing::{calculate_part_cost, CostInput};
/// let cost = calculate_part_cost(&CostInput {
///     weight_grams: 50.0,
///     print_time_minutes: 90.0,
///     material_cost_per_gram: 2.0,
///     printer_hourly_rate: 100.0,
/// }).unwrap();
/// assert_eq!(cost.base_cost, 250.0);
/// ```
pub fn calculate_part_cost(input: &CostInput) -> anyhow::Result<CostBreakdown> {
    if !(input.weight_grams > 0.0) {
        anyhow::bail!("weight must be positive");
    }
    if !(input.print_time_minutes > 0.0) {
        anyhow::bail!("print time must be positive");
    }
    if input.material_cost_per_gram < 0.0 {
        anyhow::bail!("material cost per gram must not be negative");
    }
    if input.printer_hourly_rate < 0.0 {
        anyhow::bail!("printer hourly rate must not be negative");
    }

    let material_cost = input.weight_grams * input.material_cost_per_gram;
    let print_time_hours = input.print_time_minutes / 60.0;
    let print_cost = print_time_hours * input.printer_hourly_rate;

    Ok(CostBreakdown {
        material_cost,
        print_cost,
        base_cost: material_cost + print_cost,
    })
}

/// Compute order totals over `(price_at_order, quantity)` lines.
///
/// The markup percent is clamped to `[0, 500]`; quantities must be
/// positive and the line list non-empty.
pub fn calculate_order_totals(
    lines: &[(f64, u32)],
    markup_percent: f64,
) -> anyhow::Result<OrderTotals> {
    if lines.is_empty() {
        anyhow::bail!("order must have at least one line");
    }
    if lines.iter().any(|(_, qty)| *qty == 0) {
        anyhow::bail!("line quantity must be positive");
    }

    let subtotal: f64 = lines
        .iter()
        .map(|(price, qty)| price * f64::from(*qty))
        .sum();
    let markup = subtotal * (clamp_markup(markup_percent) / 100.0);

    Ok(OrderTotals {
        subtotal,
        markup,
        total: subtotal + markup,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CostInput {
        CostInput {
            weight_grams: 50.0,
            print_time_minutes: 90.0,
            material_cost_per_gram: 2.0,
            printer_hourly_rate: 100.0,
        }
    }

    #[test]
    fn test_part_cost_breakdown() {
        let cost = calculate_part_cost(&input()).unwrap();
        assert_eq!(cost.material_cost, 100.0);
        assert_eq!(cost.print_cost, 150.0);
        assert_eq!(cost.base_cost, 250.0);
    }

    #[test]
    fn test_suggested_price_markups() {
        let cost = calculate_part_cost(&input()).unwrap();
        assert_eq!(cost.suggested_price(0.0), 250.0);
        assert_eq!(cost.suggested_price(30.0), 325.0);
        assert_eq!(cost.suggested_price(500.0), 1500.0);
    }

    #[test]
    fn test_markup_clamped() {
        let cost = calculate_part_cost(&input()).unwrap();
        // Above the cap behaves like the cap, below zero like zero
        assert_eq!(cost.suggested_price(900.0), cost.suggested_price(500.0));
        assert_eq!(cost.suggested_price(-10.0), cost.suggested_price(0.0));
        assert_eq!(clamp_markup(1000.0), 500.0);
        assert_eq!(clamp_markup(-1.0), 0.0);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let mut bad = input();
        bad.weight_grams = 0.0;
        assert!(calculate_part_cost(&bad).is_err());

        let mut bad = input();
        bad.print_time_minutes = -5.0;
        assert!(calculate_part_cost(&bad).is_err());
    }

    #[test]
    fn test_order_totals() {
        let totals = calculate_order_totals(&[(325.0, 2), (100.0, 1)], 10.0).unwrap();
        assert_eq!(totals.subtotal, 750.0);
        assert_eq!(totals.markup, 75.0);
        assert_eq!(totals.total, 825.0);
    }

    #[test]
    fn test_order_totals_markup_clamped() {
        let capped = calculate_order_totals(&[(100.0, 1)], 9999.0).unwrap();
        assert_eq!(capped.total, 600.0);
    }

    #[test]
    fn test_order_totals_rejects_bad_lines() {
        assert!(calculate_order_totals(&[], 10.0).is_err());
        assert!(calculate_order_totals(&[(100.0, 0)], 10.0).is_err());
    }
}
