//! Recipe model

use serde::{Deserialize, Serialize};

/// Default prep factor: labor and equipment overhead applied to a
/// recipe's ingredient cost.
pub const DEFAULT_PREP_FACTOR: f64 = 0.10;

/// A recipe producing a number of servings from its ingredient lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub servings: f64,
    #[serde(default = "default_prep_factor")]
    pub prep_factor: f64,
    #[serde(default)]
    pub description: String,
    /// Minutes
    #[serde(default)]
    pub prep_time: u32,
    /// Minutes
    #[serde(default)]
    pub cook_time: u32,
    /// Discrete-yield recipes (pies, cakes) scale by whole units only.
    #[serde(default)]
    pub whole_unit: bool,
}

fn default_prep_factor() -> f64 {
    DEFAULT_PREP_FACTOR
}

/// An ingredient line on a recipe.
///
/// The unit is stored exactly as entered; alias resolution happens at
/// costing time, not at data entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
}

impl RecipeLine {
    pub fn new(ingredient: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity,
            unit: unit.into(),
        }
    }
}
