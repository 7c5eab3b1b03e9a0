//! Costing module
//!
//! Prices recipe and plate lines against ingredient recipe-unit costs,
//! composes prep-factor and Q-factor surcharges, and scales recipes.

pub mod line;
pub mod plate;
pub mod recipe;
pub mod scale;

pub use line::{
    price_line, round_cents, round_cost, NormalizedQuantity, PricedLine, MIN_LINE_COST,
};
pub use plate::{calculate_plate_cost, PlateCostBreakdown, RecipeContribution, SubRecipeCost};
pub use recipe::{calculate_recipe_cost, RecipeCostBreakdown};
pub use scale::{scale_recipe, ScaledLine, ScaledRecipeCost};

use std::collections::HashMap;

use thiserror::Error;

use crate::models::IngredientPricing;

/// Costing error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostError {
    #[error("unknown ingredient '{0}'")]
    UnknownIngredient(String),

    #[error("unknown recipe '{0}'")]
    UnknownRecipe(String),

    #[error("unknown plate '{0}'")]
    UnknownPlate(String),

    #[error("invalid servings {0}: must be greater than zero")]
    InvalidServings(f64),

    #[error("invalid quantity {quantity} for ingredient '{ingredient}'")]
    InvalidQuantity { ingredient: String, quantity: f64 },
}

/// Result type for costing operations
pub type CostResult<T> = Result<T, CostError>;

/// Price lookup for ingredients.
///
/// Returns the ingredient's canonical recipe unit and the cost per one of
/// it, or `None` when the ingredient is unknown.
pub trait PricingSource {
    fn ingredient_pricing(&self, name: &str) -> Option<IngredientPricing>;
}

impl PricingSource for HashMap<String, IngredientPricing> {
    fn ingredient_pricing(&self, name: &str) -> Option<IngredientPricing> {
        self.get(name).cloned()
    }
}
