//! Plate costing
//!
//! Prices a plate from its sub-recipe contributions and direct ingredient
//! lines, then layers the Q-factor surcharge over the subtotal.

use serde::{Deserialize, Serialize};

use crate::models::PlateLine;
use crate::units::UnitConverter;

use super::line::{price_line, round_cents, PricedLine};
use super::{CostError, CostResult, PricingSource};

/// A sub-recipe consumed by a plate, priced per serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubRecipeCost {
    pub recipe_name: String,
    pub cost_per_serving: f64,
    /// Servings of the sub-recipe one plate consumes.
    pub quantity_consumed: f64,
}

/// A sub-recipe's contribution to a plate's cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeContribution {
    pub recipe_name: String,
    pub cost_per_serving: f64,
    pub quantity_consumed: f64,
    pub cost: f64,
}

/// Cost breakdown for one plate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateCostBreakdown {
    pub plate_name: String,
    /// Sum of sub-recipe contributions.
    pub recipe_cost: f64,
    /// Sum of rounded direct-line costs.
    pub ingredient_cost: f64,
    pub subtotal: f64,
    pub q_factor: f64,
    pub q_factor_cost: f64,
    pub total_cost: f64,
    pub recipes: Vec<RecipeContribution>,
    pub lines: Vec<PricedLine>,
}

/// Calculate the total cost for a plate/menu item.
///
/// Each sub-recipe contributes `cost_per_serving * quantity_consumed`
/// exactly once; its own ingredient lines are never re-summed into the
/// direct total. The Q-factor applies to the combined subtotal.
pub fn calculate_plate_cost(
    converter: &UnitConverter,
    plate_name: &str,
    direct_lines: &[PlateLine],
    sub_recipes: &[SubRecipeCost],
    pricing: &impl PricingSource,
    q_factor: f64,
) -> CostResult<PlateCostBreakdown> {
    let mut lines = Vec::with_capacity(direct_lines.len());
    let mut ingredient_cost = 0.0;

    for line in direct_lines {
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
        lines.push(priced_line);
    }

    let mut recipes = Vec::with_capacity(sub_recipes.len());
    let mut recipe_cost = 0.0;

    for sub in sub_recipes {
        let cost = sub.cost_per_serving * sub.quantity_consumed;
        recipe_cost += cost;
        recipes.push(RecipeContribution {
            recipe_name: sub.recipe_name.clone(),
            cost_per_serving: sub.cost_per_serving,
            quantity_consumed: sub.quantity_consumed,
            cost: round_cents(cost),
        });
    }

    let subtotal = recipe_cost + ingredient_cost;
    let q_factor_cost = subtotal * q_factor;
    let total_cost = subtotal + q_factor_cost;

    Ok(PlateCostBreakdown {
        plate_name: plate_name.to_string(),
        recipe_cost: round_cents(recipe_cost),
        ingredient_cost: round_cents(ingredient_cost),
        subtotal: round_cents(subtotal),
        q_factor,
        q_factor_cost: round_cents(q_factor_cost),
        total_cost: round_cents(total_cost),
        recipes,
        lines,
    })
}
