//! Ingredient model
//!
//! Represents an ingredient at three levels: how it is purchased, how it
//! is tracked in inventory, and how recipes measure it.

use serde::{Deserialize, Serialize};

/// An ingredient with purchase, inventory, and recipe level costing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Exactly one category, used for grouping in listings.
    pub category: String,
    /// How it is bought (case, bag, etc.)
    pub purchase_unit: String,
    /// Price per purchase unit
    pub purchase_price: f64,
    /// What is tracked in stock (#10 can, lb, ea, etc.)
    pub inventory_unit: String,
    /// Inventory units per purchase unit
    pub units_per_purchase: f64,
    /// Cost per inventory unit
    pub cost_per_inventory_unit: f64,
    /// Inventory on hand, in inventory units
    pub on_hand: f64,
    /// What recipes use (C, oz., ea, etc.)
    pub recipe_unit: String,
    /// Recipe units per inventory unit
    pub recipe_units_per_inventory: f64,
    /// Usable fraction after trim and cooking loss, as a percentage
    pub yield_percent: f64,
    /// Par level, in inventory units
    #[serde(default)]
    pub par_level: f64,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub notes: String,
}

/// Pricing snapshot consumed by the costing layer: the canonical recipe
/// unit and the cost per one of it, with yield loss already folded in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientPricing {
    pub cost_per_recipe_unit: f64,
    pub recipe_unit: String,
}

/// Cost per recipe unit with yield loss folded in.
///
/// Returns zero when either divisor is not positive.
pub fn recipe_unit_cost(
    cost_per_inventory_unit: f64,
    recipe_units_per_inventory: f64,
    yield_percent: f64,
) -> f64 {
    if recipe_units_per_inventory <= 0.0 || yield_percent <= 0.0 {
        return 0.0;
    }
    (cost_per_inventory_unit / recipe_units_per_inventory) / (yield_percent / 100.0)
}

impl Ingredient {
    /// Cost per inventory unit derived from the purchase price.
    pub fn inventory_unit_cost(&self) -> f64 {
        if self.units_per_purchase <= 0.0 {
            return 0.0;
        }
        self.purchase_price / self.units_per_purchase
    }

    /// Cost per recipe unit derived from the stored inventory cost.
    pub fn recipe_unit_cost(&self) -> f64 {
        recipe_unit_cost(
            self.cost_per_inventory_unit,
            self.recipe_units_per_inventory,
            self.yield_percent,
        )
    }

    /// Pricing snapshot for the costing layer.
    pub fn pricing(&self) -> IngredientPricing {
        IngredientPricing {
            cost_per_recipe_unit: self.recipe_unit_cost(),
            recipe_unit: self.recipe_unit.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomatoes() -> Ingredient {
        Ingredient {
            name: "Roma Tomatoes".to_string(),
            category: "Produce".to_string(),
            purchase_unit: "case".to_string(),
            purchase_price: 24.0,
            inventory_unit: "lb".to_string(),
            units_per_purchase: 24.0,
            cost_per_inventory_unit: 1.0,
            on_hand: 12.0,
            recipe_unit: "oz.".to_string(),
            recipe_units_per_inventory: 16.0,
            yield_percent: 95.0,
            par_level: 6.0,
            supplier: "".to_string(),
            notes: "".to_string(),
        }
    }

    #[test]
    fn test_inventory_unit_cost() {
        assert!((tomatoes().inventory_unit_cost() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_recipe_unit_cost_folds_in_yield() {
        // (1.00 / 16) / 0.95
        let cost = tomatoes().recipe_unit_cost();
        assert!((cost - 0.0657894736).abs() < 1e-6);
    }

    #[test]
    fn test_recipe_unit_cost_guards_zero_divisors() {
        assert_eq!(recipe_unit_cost(4.0, 0.0, 95.0), 0.0);
        assert_eq!(recipe_unit_cost(4.0, 8.0, 0.0), 0.0);
    }

    #[test]
    fn test_pricing_snapshot() {
        let pricing = tomatoes().pricing();
        assert_eq!(pricing.recipe_unit, "oz.");
        assert!((pricing.cost_per_recipe_unit - tomatoes().recipe_unit_cost()).abs() < 1e-12);
    }
}
