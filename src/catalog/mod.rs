//! In-memory catalog
//!
//! Holds ingredients, recipes, and plates and wires lookups into the
//! costing layer. Persistence belongs to the embedding application; the
//! catalog is a value snapshot, and every costing call reads it without
//! mutation.

use std::collections::HashMap;

use crate::costing::{
    calculate_plate_cost, calculate_recipe_cost, scale_recipe, CostError, CostResult,
    PlateCostBreakdown, PricingSource, RecipeCostBreakdown, ScaledRecipeCost, SubRecipeCost,
};
use crate::models::{
    Ingredient, IngredientPricing, Plate, PlateLine, PlateRecipeRef, Recipe, RecipeLine,
    DEFAULT_PREP_FACTOR, DEFAULT_Q_FACTOR,
};
use crate::units::UnitConverter;

/// Snapshot of ingredients, recipes, and plates keyed by name.
#[derive(Debug, Default)]
pub struct Catalog {
    ingredients: HashMap<String, Ingredient>,
    recipes: HashMap<String, Recipe>,
    recipe_lines: HashMap<String, Vec<RecipeLine>>,
    plates: HashMap<String, Plate>,
    plate_lines: HashMap<String, Vec<PlateLine>>,
    plate_recipes: HashMap<String, Vec<PlateRecipeRef>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Building the snapshot
    // ------------------------------------------------------------------

    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.name.clone(), ingredient);
    }

    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.name.clone(), recipe);
    }

    pub fn add_recipe_line(&mut self, recipe: &str, line: RecipeLine) {
        self.recipe_lines
            .entry(recipe.to_string())
            .or_default()
            .push(line);
    }

    pub fn add_plate(&mut self, plate: Plate) {
        self.plates.insert(plate.name.clone(), plate);
    }

    pub fn add_plate_line(&mut self, plate: &str, line: PlateLine) {
        self.plate_lines
            .entry(plate.to_string())
            .or_default()
            .push(line);
    }

    pub fn add_plate_recipe(&mut self, plate: &str, recipe_ref: PlateRecipeRef) {
        self.plate_recipes
            .entry(plate.to_string())
            .or_default()
            .push(recipe_ref);
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    pub fn plate(&self, name: &str) -> Option<&Plate> {
        self.plates.get(name)
    }

    pub fn recipe_lines(&self, recipe: &str) -> &[RecipeLine] {
        self.recipe_lines
            .get(recipe)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn plate_lines(&self, plate: &str) -> &[PlateLine] {
        self.plate_lines
            .get(plate)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn plate_recipes(&self, plate: &str) -> &[PlateRecipeRef] {
        self.plate_recipes
            .get(plate)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Prep factor for a recipe, defaulting when the recipe carries none.
    pub fn prep_factor(&self, recipe: &str) -> f64 {
        self.recipes
            .get(recipe)
            .map(|r| r.prep_factor)
            .unwrap_or(DEFAULT_PREP_FACTOR)
    }

    /// Q-factor for a plate, defaulting when the plate carries none.
    pub fn q_factor(&self, plate: &str) -> f64 {
        self.plates
            .get(plate)
            .map(|p| p.q_factor)
            .unwrap_or(DEFAULT_Q_FACTOR)
    }

    /// Ingredients grouped by category, sorted by name within each group.
    pub fn ingredients_by_category(&self) -> HashMap<String, Vec<&Ingredient>> {
        let mut grouped: HashMap<String, Vec<&Ingredient>> = HashMap::new();
        for ingredient in self.ingredients.values() {
            grouped
                .entry(ingredient.category.clone())
                .or_default()
                .push(ingredient);
        }
        for group in grouped.values_mut() {
            group.sort_by(|a, b| a.name.cmp(&b.name));
        }
        grouped
    }

    // ------------------------------------------------------------------
    // Costing
    // ------------------------------------------------------------------

    /// Cost one recipe batch.
    pub fn recipe_cost(
        &self,
        converter: &UnitConverter,
        name: &str,
    ) -> CostResult<RecipeCostBreakdown> {
        let recipe = self
            .recipes
            .get(name)
            .ok_or_else(|| CostError::UnknownRecipe(name.to_string()))?;

        calculate_recipe_cost(
            converter,
            name,
            self.recipe_lines(name),
            self,
            recipe.prep_factor,
            recipe.servings,
        )
    }

    /// Cost a plate: sub-recipe contributions plus direct lines, then the
    /// Q-factor over the subtotal.
    pub fn plate_cost(
        &self,
        converter: &UnitConverter,
        name: &str,
    ) -> CostResult<PlateCostBreakdown> {
        let plate = self
            .plates
            .get(name)
            .ok_or_else(|| CostError::UnknownPlate(name.to_string()))?;

        let mut sub_recipes = Vec::new();
        for recipe_ref in self.plate_recipes(name) {
            let breakdown = self.recipe_cost(converter, &recipe_ref.recipe)?;
            sub_recipes.push(SubRecipeCost {
                recipe_name: recipe_ref.recipe.clone(),
                cost_per_serving: breakdown.cost_per_serving,
                quantity_consumed: recipe_ref.quantity_consumed(),
            });
        }

        calculate_plate_cost(
            converter,
            name,
            self.plate_lines(name),
            &sub_recipes,
            self,
            plate.q_factor,
        )
    }

    /// Cost a recipe and scale it to a target serving count, honoring the
    /// recipe's whole-unit flag.
    pub fn scale_recipe_cost(
        &self,
        converter: &UnitConverter,
        name: &str,
        target_servings: f64,
    ) -> CostResult<ScaledRecipeCost> {
        let whole_unit = self
            .recipes
            .get(name)
            .ok_or_else(|| CostError::UnknownRecipe(name.to_string()))?
            .whole_unit;

        let breakdown = self.recipe_cost(converter, name)?;
        scale_recipe(&breakdown, target_servings, whole_unit)
    }

    /// Cost every recipe in the catalog, in name order.
    ///
    /// Failures are reported per recipe; one bad recipe never aborts the
    /// batch.
    pub fn cost_all_recipes(
        &self,
        converter: &UnitConverter,
    ) -> Vec<(String, CostResult<RecipeCostBreakdown>)> {
        let mut names: Vec<&String> = self.recipes.keys().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| (name.clone(), self.recipe_cost(converter, name)))
            .collect()
    }
}

impl PricingSource for Catalog {
    fn ingredient_pricing(&self, name: &str) -> Option<IngredientPricing> {
        self.ingredients.get(name).map(Ingredient::pricing)
    }
}
