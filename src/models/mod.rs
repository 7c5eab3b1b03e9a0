//! Data models
//!
//! Value types for ingredients, recipes, and plates.

mod ingredient;
mod plate;
mod recipe;

pub use ingredient::{recipe_unit_cost, Ingredient, IngredientPricing};
pub use plate::{Plate, PlateLine, PlateRecipeRef, DEFAULT_Q_FACTOR};
pub use recipe::{Recipe, RecipeLine, DEFAULT_PREP_FACTOR};
