//! Recipe costing
//!
//! Prices a recipe's ingredient lines and layers the prep-factor
//! surcharge on top.

use serde::{Deserialize, Serialize};

use crate::models::RecipeLine;
use crate::units::UnitConverter;

use super::line::{price_line, round_cents, PricedLine};
use super::{CostError, CostResult, PricingSource};

/// Cost breakdown for one recipe batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCostBreakdown {
    pub recipe_name: String,
    pub servings: f64,
    /// Sum of rounded line costs.
    pub ingredient_cost: f64,
    pub prep_factor: f64,
    pub prep_factor_cost: f64,
    pub total_cost: f64,
    pub cost_per_serving: f64,
    pub lines: Vec<PricedLine>,
}

/// Calculate the total cost and cost per serving for a recipe.
///
/// Conversion failures never abort the calculation — affected lines are
/// priced through the fallback policy and tagged in the breakdown.
/// Unknown ingredients and invalid inputs fail the whole calculation.
pub fn calculate_recipe_cost(
    converter: &UnitConverter,
    recipe_name: &str,
    lines: &[RecipeLine],
    pricing: &impl PricingSource,
    prep_factor: f64,
    servings: f64,
) -> CostResult<RecipeCostBreakdown> {
    if !servings.is_finite() || servings <= 0.0 {
        return Err(CostError::InvalidServings(servings));
    }

    let mut priced = Vec::with_capacity(lines.len());
    let mut ingredient_cost = 0.0;

    for line in lines {
        let ingredient_pricing = pricing
            .ingredient_pricing(&line.ingredient)
            .ok_or_else(|| CostError::UnknownIngredient(line.ingredient.clone()))?;

        let priced_line = price_line(
            converter,
            &line.ingredient,
            line.quantity,
            &line.unit,
            ingredient_pricing.cost_per_recipe_unit,
            &ingredient_pricing.recipe_unit,
        )?;

        ingredient_cost += priced_line.cost;
        priced.push(priced_line);
    }

    let prep_factor_cost = ingredient_cost * prep_factor;
    let total_cost = ingredient_cost + prep_factor_cost;

    Ok(RecipeCostBreakdown {
        recipe_name: recipe_name.to_string(),
        servings,
        ingredient_cost: round_cents(ingredient_cost),
        prep_factor,
        prep_factor_cost: round_cents(prep_factor_cost),
        total_cost: round_cents(total_cost),
        cost_per_serving: round_cents(total_cost / servings),
        lines: priced,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::models::IngredientPricing;

    use super::*;

    fn pricing() -> HashMap<String, IngredientPricing> {
        let mut map = HashMap::new();
        map.insert(
            "Olive Oil".to_string(),
            IngredientPricing {
                cost_per_recipe_unit: 0.50,
                recipe_unit: "oz.".to_string(),
            },
        );
        map.insert(
            "Saffron".to_string(),
            IngredientPricing {
                cost_per_recipe_unit: 0.75,
                recipe_unit: "ea-saffron-thread".to_string(),
            },
        );
        map
    }

    #[test]
    fn test_recipe_cost_end_to_end() {
        // 2 C at $0.50/oz. = $8.00; prep 10% on top; 4 servings
        let lines = vec![RecipeLine::new("Olive Oil", 2.0, "C")];
        let breakdown = calculate_recipe_cost(
            &UnitConverter::new(),
            "Aioli",
            &lines,
            &pricing(),
            0.10,
            4.0,
        )
        .unwrap();

        assert!((breakdown.ingredient_cost - 8.00).abs() < 1e-9);
        assert!((breakdown.prep_factor_cost - 0.80).abs() < 1e-9);
        assert!((breakdown.total_cost - 8.80).abs() < 1e-9);
        assert!((breakdown.cost_per_serving - 2.20).abs() < 1e-9);
        assert_eq!(breakdown.lines.len(), 1);
        assert!(!breakdown.lines[0].normalized.is_fallback());
    }

    #[test]
    fn test_fallback_line_included_and_flagged() {
        let lines = vec![RecipeLine::new("Saffron", 3.0, "pinch")];
        let breakdown = calculate_recipe_cost(
            &UnitConverter::new(),
            "Paella",
            &lines,
            &pricing(),
            0.10,
            2.0,
        )
        .unwrap();

        // pinch cannot reach ea-saffron-thread; 3 threads at $0.75
        assert!(breakdown.lines[0].normalized.is_fallback());
        assert!((breakdown.ingredient_cost - 2.25).abs() < 1e-9);
        assert!(breakdown.ingredient_cost > 0.0);
    }

    #[test]
    fn test_unknown_ingredient_is_fatal() {
        let lines = vec![RecipeLine::new("Unobtanium", 1.0, "oz.")];
        let err = calculate_recipe_cost(
            &UnitConverter::new(),
            "Mystery Dish",
            &lines,
            &pricing(),
            0.10,
            4.0,
        )
        .unwrap_err();
        assert_eq!(err, CostError::UnknownIngredient("Unobtanium".to_string()));
    }

    #[test]
    fn test_invalid_servings_rejected() {
        let err = calculate_recipe_cost(&UnitConverter::new(), "Aioli", &[], &pricing(), 0.10, 0.0)
            .unwrap_err();
        assert_eq!(err, CostError::InvalidServings(0.0));
    }

    #[test]
    fn test_empty_recipe_costs_nothing() {
        let breakdown =
            calculate_recipe_cost(&UnitConverter::new(), "Water", &[], &pricing(), 0.10, 1.0)
                .unwrap();
        assert_eq!(breakdown.total_cost, 0.0);
        assert!(breakdown.lines.is_empty());
    }
}
