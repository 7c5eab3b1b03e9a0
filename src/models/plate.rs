//! Plate model
//!
//! A plate is a menu item assembled from sub-recipes and direct
//! ingredient lines.

use serde::{Deserialize, Serialize};

/// Default Q-factor: miscellaneous and garnish costs not itemized as
/// explicit lines.
pub const DEFAULT_Q_FACTOR: f64 = 0.04;

/// A plate/menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plate {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_q_factor")]
    pub q_factor: f64,
}

fn default_q_factor() -> f64 {
    DEFAULT_Q_FACTOR
}

/// A direct ingredient line on a plate, outside any sub-recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateLine {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
}

impl PlateLine {
    pub fn new(ingredient: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// A sub-recipe attached to a plate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateRecipeRef {
    pub recipe: String,
    /// Nominal serving multiplier.
    pub servings: f64,
    /// Explicit override for how much of the sub-recipe the plate
    /// consumes; takes precedence over `servings`.
    pub quantity: Option<f64>,
    /// Unit of the override, kept for display.
    pub unit: Option<String>,
}

impl PlateRecipeRef {
    /// Servings of the sub-recipe consumed by one plate.
    pub fn quantity_consumed(&self) -> f64 {
        self.quantity.unwrap_or(self.servings)
    }
}
