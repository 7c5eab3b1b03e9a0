//! Per-line pricing
//!
//! Normalizes a stored line quantity to the ingredient's recipe unit and
//! prices it, with the conversion-fallback and rounding policy shared by
//! recipe and plate costing.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::units::{ConversionError, UnitConverter};

use super::{CostError, CostResult};

/// Minimum billable cost for a line that prices below one cent.
pub const MIN_LINE_COST: f64 = 0.01;

/// How a line quantity was normalized to the ingredient's recipe unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "quantity", rename_all = "snake_case")]
pub enum NormalizedQuantity {
    /// Converted through the unit table (or already canonical).
    Converted(f64),
    /// No conversion path existed; the stored quantity was priced as if
    /// already in the recipe unit.
    Unconvertible(f64),
}

impl NormalizedQuantity {
    /// The quantity actually priced, in recipe units.
    pub fn value(&self) -> f64 {
        match *self {
            NormalizedQuantity::Converted(quantity) => quantity,
            NormalizedQuantity::Unconvertible(quantity) => quantity,
        }
    }

    /// Whether this line was priced through the fallback policy.
    pub fn is_fallback(&self) -> bool {
        matches!(self, NormalizedQuantity::Unconvertible(_))
    }
}

/// A priced recipe or plate line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedLine {
    pub ingredient: String,
    /// Quantity as stored on the line.
    pub quantity: f64,
    /// Unit as stored on the line.
    pub unit: String,
    pub normalized: NormalizedQuantity,
    /// Rounded line cost.
    pub cost: f64,
}

/// Price a single line against the ingredient's recipe-unit cost.
///
/// When no conversion path connects the stored unit to the recipe unit,
/// the stored quantity is priced as if already canonical — a conservative
/// policy: a fractional overcharge beats zero-costing real inventory.
/// Fallback lines are tagged `Unconvertible` so callers can audit them.
pub fn price_line(
    converter: &UnitConverter,
    ingredient: &str,
    quantity: f64,
    unit: &str,
    cost_per_recipe_unit: f64,
    recipe_unit: &str,
) -> CostResult<PricedLine> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(CostError::InvalidQuantity {
            ingredient: ingredient.to_string(),
            quantity,
        });
    }

    let normalized = if unit == recipe_unit {
        NormalizedQuantity::Converted(quantity)
    } else {
        match converter.convert(quantity, unit, recipe_unit) {
            Ok(converted) => NormalizedQuantity::Converted(converted),
            Err(ConversionError::NoConversionPath { from, to }) => {
                warn!(
                    ingredient,
                    from = %from,
                    to = %to,
                    quantity,
                    "no conversion path; pricing stored quantity as {recipe_unit}"
                );
                NormalizedQuantity::Unconvertible(quantity)
            }
        }
    };

    let cost = round_cost(normalized.value() * cost_per_recipe_unit);

    Ok(PricedLine {
        ingredient: ingredient.to_string(),
        quantity,
        unit: unit.to_string(),
        normalized,
        cost,
    })
}

/// Round a raw line cost: sub-cent positive costs clamp to the one-cent
/// floor, everything else rounds half-up to whole cents.
pub fn round_cost(raw: f64) -> f64 {
    if raw > 0.0 && raw < MIN_LINE_COST {
        MIN_LINE_COST
    } else {
        round_cents(raw)
    }
}

/// Round to whole cents, half away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
