//! Recipe scaling
//!
//! Scales a costed recipe to a target serving count, smoothly or by whole
//! units for discrete-yield recipes.

use serde::{Deserialize, Serialize};

use super::line::round_cents;
use super::recipe::RecipeCostBreakdown;
use super::{CostError, CostResult};

/// An ingredient line scaled to the target serving count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaledLine {
    pub ingredient: String,
    pub original_quantity: f64,
    pub scaled_quantity: f64,
    pub unit: String,
}

/// A recipe cost breakdown scaled to a target serving count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaledRecipeCost {
    pub recipe_name: String,
    pub base_servings: f64,
    pub target_servings: f64,
    /// Servings actually produced; exceeds the target for whole-unit
    /// recipes when the target does not divide evenly.
    pub actual_servings: f64,
    pub scale_factor: f64,
    /// Whole units produced, for discrete-yield recipes.
    pub units_needed: Option<u32>,
    /// Servings produced beyond the target, for discrete-yield recipes.
    pub waste_servings: Option<f64>,
    pub scaled_ingredient_cost: f64,
    pub prep_factor: f64,
    pub prep_factor_cost: f64,
    pub scaled_total: f64,
    pub cost_per_serving: f64,
    pub scaled_lines: Vec<ScaledLine>,
}

/// Scale a costed recipe to a target serving count.
///
/// Whole-unit recipes (a pie, a cake) cannot be made fractionally: the
/// unit count rounds up, the cost scales by that integer, and the excess
/// servings are reported as waste rather than discarded.
pub fn scale_recipe(
    breakdown: &RecipeCostBreakdown,
    target_servings: f64,
    whole_unit: bool,
) -> CostResult<ScaledRecipeCost> {
    if !target_servings.is_finite() || target_servings <= 0.0 {
        return Err(CostError::InvalidServings(target_servings));
    }

    let base_servings = breakdown.servings;

    let (scale_factor, units_needed, actual_servings, waste_servings) = if whole_unit {
        let units = (target_servings / base_servings).ceil() as u32;
        let actual = f64::from(units) * base_servings;
        (
            f64::from(units),
            Some(units),
            actual,
            Some(actual - target_servings),
        )
    } else {
        (
            target_servings / base_servings,
            None,
            target_servings,
            None,
        )
    };

    let scaled_ingredient_cost = breakdown.ingredient_cost * scale_factor;
    let prep_factor_cost = scaled_ingredient_cost * breakdown.prep_factor;
    let scaled_total = scaled_ingredient_cost + prep_factor_cost;

    let scaled_lines = breakdown
        .lines
        .iter()
        .map(|line| ScaledLine {
            ingredient: line.ingredient.clone(),
            original_quantity: line.quantity,
            scaled_quantity: round_quantity(line.quantity * scale_factor),
            unit: line.unit.clone(),
        })
        .collect();

    Ok(ScaledRecipeCost {
        recipe_name: breakdown.recipe_name.clone(),
        base_servings,
        target_servings,
        actual_servings,
        scale_factor,
        units_needed,
        waste_servings,
        scaled_ingredient_cost: round_cents(scaled_ingredient_cost),
        prep_factor: breakdown.prep_factor,
        prep_factor_cost: round_cents(prep_factor_cost),
        scaled_total: round_cents(scaled_total),
        cost_per_serving: round_cents(scaled_total / actual_servings),
        scaled_lines,
    })
}

fn round_quantity(quantity: f64) -> f64 {
    (quantity * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use crate::costing::{NormalizedQuantity, PricedLine};

    use super::*;

    fn pie_breakdown() -> RecipeCostBreakdown {
        RecipeCostBreakdown {
            recipe_name: "Apple Pie".to_string(),
            servings: 8.0,
            ingredient_cost: 16.00,
            prep_factor: 0.0,
            prep_factor_cost: 0.0,
            total_cost: 16.00,
            cost_per_serving: 2.00,
            lines: vec![PricedLine {
                ingredient: "Apples".to_string(),
                quantity: 3.0,
                unit: "lb".to_string(),
                normalized: NormalizedQuantity::Converted(3.0),
                cost: 16.00,
            }],
        }
    }

    #[test]
    fn test_whole_unit_scaling_rounds_up_and_reports_waste() {
        let scaled = scale_recipe(&pie_breakdown(), 10.0, true).unwrap();

        assert_eq!(scaled.units_needed, Some(2));
        assert!((scaled.actual_servings - 16.0).abs() < 1e-12);
        assert!((scaled.scaled_ingredient_cost - 32.00).abs() < 1e-9);
        assert_eq!(scaled.waste_servings, Some(6.0));
        assert!((scaled.cost_per_serving - 2.00).abs() < 1e-9);
    }

    #[test]
    fn test_whole_unit_exact_multiple_has_no_waste() {
        let scaled = scale_recipe(&pie_breakdown(), 16.0, true).unwrap();
        assert_eq!(scaled.units_needed, Some(2));
        assert_eq!(scaled.waste_servings, Some(0.0));
    }

    #[test]
    fn test_smooth_scaling() {
        let mut breakdown = pie_breakdown();
        breakdown.prep_factor = 0.10;
        let scaled = scale_recipe(&breakdown, 12.0, false).unwrap();

        assert!((scaled.scale_factor - 1.5).abs() < 1e-12);
        assert_eq!(scaled.units_needed, None);
        assert_eq!(scaled.waste_servings, None);
        assert!((scaled.scaled_ingredient_cost - 24.00).abs() < 1e-9);
        assert!((scaled.prep_factor_cost - 2.40).abs() < 1e-9);
        assert!((scaled.scaled_total - 26.40).abs() < 1e-9);
        assert!((scaled.cost_per_serving - 2.20).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_line_quantities() {
        let scaled = scale_recipe(&pie_breakdown(), 10.0, true).unwrap();
        assert_eq!(scaled.scaled_lines.len(), 1);
        assert!((scaled.scaled_lines[0].scaled_quantity - 6.0).abs() < 1e-12);
        assert_eq!(scaled.scaled_lines[0].unit, "lb");
    }

    #[test]
    fn test_invalid_target_rejected() {
        let err = scale_recipe(&pie_breakdown(), 0.0, true).unwrap_err();
        assert_eq!(err, CostError::InvalidServings(0.0));
        let err = scale_recipe(&pie_breakdown(), -4.0, false).unwrap_err();
        assert_eq!(err, CostError::InvalidServings(-4.0));
    }
}
