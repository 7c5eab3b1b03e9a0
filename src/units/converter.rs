//! Unit conversion
//!
//! Resolves a quantity from one culinary unit to another through the
//! curated factor table.

use std::collections::HashMap;

use thiserror::Error;

use super::registry::{CHAIN_HUBS, CONVERSION_FACTORS, UNIT_ALIASES};

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("no conversion available from {from} to {to}")]
    NoConversionPath { from: String, to: String },
}

/// Result type for unit conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Handles all unit conversions between purchase, inventory, and recipe
/// units.
///
/// The tables are immutable after construction, so a single converter can
/// be shared by reference across any number of concurrent callers.
pub struct UnitConverter {
    factors: HashMap<(String, String), f64>,
    aliases: HashMap<&'static str, &'static str>,
}

impl UnitConverter {
    pub fn new() -> Self {
        let factors = CONVERSION_FACTORS
            .iter()
            .map(|&(from, to, factor)| ((from.to_string(), to.to_string()), factor))
            .collect();
        let aliases = UNIT_ALIASES.iter().copied().collect();

        Self { factors, aliases }
    }

    /// Resolve a unit spelling to its canonical form. Unknown spellings
    /// are returned as-is.
    pub fn canonical_unit<'a>(&self, unit: &'a str) -> &'a str {
        self.aliases.get(unit).copied().unwrap_or(unit)
    }

    /// Convert a quantity from one unit to another.
    ///
    /// Both unit names pass through the alias table first. Resolution
    /// tries the direct edge, then the reverse edge, then a single hop
    /// through one of the hub units. Chaining never uses more than one
    /// intermediate: each leg of the hop resolves via direct or reverse
    /// edges only, so approximation error cannot compound across a long
    /// path.
    pub fn convert(&self, quantity: f64, from_unit: &str, to_unit: &str) -> ConversionResult<f64> {
        if let Some(converted) = self.convert_direct(quantity, from_unit, to_unit) {
            return Ok(converted);
        }

        for hub in CHAIN_HUBS {
            if let Some(converted) = self
                .convert_direct(quantity, from_unit, hub)
                .and_then(|via_hub| self.convert_direct(via_hub, hub, to_unit))
            {
                return Ok(converted);
            }
        }

        Err(ConversionError::NoConversionPath {
            from: self.canonical_unit(from_unit).to_string(),
            to: self.canonical_unit(to_unit).to_string(),
        })
    }

    /// Resolve a conversion using the identity, direct, or reverse edge
    /// only — no chaining.
    ///
    /// The reverse edge divides by whatever factor was registered for the
    /// opposite direction; it is not assumed to be the exact reciprocal of
    /// a forward edge.
    fn convert_direct(&self, quantity: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
        let from = self.canonical_unit(from_unit);
        let to = self.canonical_unit(to_unit);

        if from == to {
            return Some(quantity);
        }
        if let Some(factor) = self.factor(from, to) {
            return Some(quantity * factor);
        }
        if let Some(factor) = self.factor(to, from) {
            return Some(quantity / factor);
        }
        None
    }

    fn factor(&self, from: &str, to: &str) -> Option<f64> {
        self.factors
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> UnitConverter {
        UnitConverter::new()
    }

    #[test]
    fn test_identity_without_registered_edges() {
        // Identity holds even for units the table has never heard of
        let c = converter();
        assert_eq!(c.convert(2.5, "ramekin", "ramekin").unwrap(), 2.5);
        assert_eq!(c.convert(0.0, "ea-tomato", "ea-tomato").unwrap(), 0.0);
    }

    #[test]
    fn test_identity_through_aliases() {
        let c = converter();
        assert_eq!(c.convert(3.0, "cups", "C").unwrap(), 3.0);
        assert_eq!(c.convert(1.5, "tablespoons", "tbsp").unwrap(), 1.5);
    }

    #[test]
    fn test_direct_edge() {
        let c = converter();
        assert!((c.convert(2.0, "C", "oz.").unwrap() - 16.0).abs() < 1e-9);
        assert!((c.convert(1.0, "can", "oz.").unwrap() - 106.0).abs() < 1e-9);
    }

    #[test]
    fn test_alias_equivalence() {
        let c = converter();
        let via_alias = c.convert(1.0, "tbsp", "t").unwrap();
        let via_canonical = c.convert(1.0, "T", "t").unwrap();
        assert!((via_alias - via_canonical).abs() < 1e-9);
        assert!((via_alias - 3.0).abs() < 1e-9);

        let plural = c.convert(4.0, "quarts", "gallon").unwrap();
        assert!((plural - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reverse_consistency_for_reciprocal_pairs() {
        let c = converter();
        let there = c.convert(3.0, "Gal.", "qt.").unwrap();
        let back = c.convert(there, "qt.", "Gal.").unwrap();
        assert!((back - 3.0).abs() < 1e-9);

        let there = c.convert(2.0, "lb", "oz.").unwrap();
        let back = c.convert(there, "oz.", "lb").unwrap();
        assert!((back - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_hop_chaining() {
        let c = converter();

        // pinch -> C has no direct or reverse edge; resolves via the "t" hub
        let pinches = c.convert(48.0, "pinch", "C").unwrap();
        assert!((pinches - 48.0 * 0.0625 * 0.0208333).abs() < 1e-9);

        // clove -> oz. resolves via the "lb" hub: 0.02 lb * 16 oz/lb
        let clove = c.convert(1.0, "clove", "oz.").unwrap();
        assert!((clove - 0.32).abs() < 1e-9);

        // g -> Kg is only connected through lb
        let kg = c.convert(500.0, "g", "Kg").unwrap();
        assert!((kg - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_no_conversion_path() {
        let c = converter();
        let err = c.convert(1.0, "ea-tomato", "bunch").unwrap_err();
        assert_eq!(
            err,
            ConversionError::NoConversionPath {
                from: "ea-tomato".to_string(),
                to: "bunch".to_string(),
            }
        );
    }

    #[test]
    fn test_failure_reports_canonical_names() {
        let c = converter();
        let err = c.convert(1.0, "eaches", "ea-shrimp-16-20").unwrap_err();
        match err {
            ConversionError::NoConversionPath { from, to } => {
                assert_eq!(from, "ea");
                assert_eq!(to, "ea-shrimp-16-20");
            }
        }
    }

    #[test]
    fn test_weight_to_volume_approximations_are_asymmetric() {
        // The dense-ingredient rows are not water-reciprocal; both
        // directions are registered and used as-is
        let c = converter();
        let tablespoons = c.convert(1.0, "lb", "T").unwrap();
        assert!((tablespoons - 32.0).abs() < 1e-9);
        let pounds = c.convert(1.0, "T", "lb").unwrap();
        assert!((pounds - 0.03125).abs() < 1e-9);
    }

    #[test]
    fn test_culinary_small_measures() {
        let c = converter();
        let dash = c.convert(2.0, "dash", "t").unwrap();
        assert!((dash - 0.25).abs() < 1e-9);
        let drizzle = c.convert(1.0, "drizzle", "t").unwrap();
        assert!((drizzle - 1.5).abs() < 1e-6);
    }
}
