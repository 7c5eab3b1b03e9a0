//! Conversion factor and alias tables
//!
//! Hand-curated registry of culinary unit relationships. Entries are
//! directional: `(from, to, f)` means one `from` equals `f` `to`. Pairs
//! registered in both directions are expected to be reciprocals, but that
//! is a data-quality expectation, not an enforced invariant — the
//! weight-to-volume rows in particular are density approximations that
//! differ between watery and dense ingredients.

/// Directed conversion factors keyed by canonical unit names.
pub const CONVERSION_FACTORS: &[(&str, &str, f64)] = &[
    // ========================================================================
    // Volume (gallon / quart / pint / cup / fluid ounce / spoons / metric)
    // ========================================================================
    ("Gal.", "qt.", 4.0),
    ("Gal.", "pt.", 8.0),
    ("Gal.", "C", 16.0),
    ("Gal.", "oz.", 128.0),
    ("Gal.", "T", 256.0),
    ("Gal.", "t", 768.0),
    ("Gal.", "L", 3.78541),
    ("Gal.", "mL", 3785.41),
    ("Gal.", "lb", 8.0), // weight-to-volume for water/liquids
    ("qt.", "Gal.", 0.25),
    ("qt.", "pt.", 2.0),
    ("qt.", "C", 4.0),
    ("qt.", "oz.", 32.0),
    ("qt.", "T", 64.0),
    ("qt.", "t", 192.0),
    ("qt.", "L", 0.946353),
    ("qt.", "mL", 946.353),
    ("qt.", "lb", 2.0), // weight-to-volume for water/liquids
    ("pt.", "Gal.", 0.125),
    ("pt.", "qt.", 0.5),
    ("pt.", "C", 2.0),
    ("pt.", "oz.", 16.0),
    ("pt.", "T", 32.0),
    ("pt.", "t", 96.0),
    ("pt.", "L", 0.473176),
    ("pt.", "mL", 473.176),
    ("pt.", "lb", 1.0), // weight-to-volume for water/liquids
    ("C", "Gal.", 0.0625),
    ("C", "qt.", 0.25),
    ("C", "pt.", 0.5),
    ("C", "oz.", 8.0),
    ("C", "T", 16.0),
    ("C", "t", 48.0),
    ("C", "L", 0.236588),
    ("C", "mL", 236.588),
    ("C", "lb", 0.5), // weight-to-volume for water/liquids
    ("oz.", "Gal.", 0.0078125),
    ("oz.", "qt.", 0.03125),
    ("oz.", "pt.", 0.0625),
    ("oz.", "C", 0.125),
    ("oz.", "T", 2.0),
    ("oz.", "t", 6.0),
    ("oz.", "L", 0.0295735),
    ("oz.", "mL", 29.5735),
    ("oz.", "lb", 0.0625),
    ("T", "Gal.", 0.00390625),
    ("T", "qt.", 0.015625),
    ("T", "pt.", 0.03125),
    ("T", "C", 0.0625),
    ("T", "oz.", 0.5),
    ("T", "t", 3.0),
    ("T", "L", 0.0147868),
    ("T", "mL", 14.7868),
    ("T", "lb", 0.03125),  // approximate for dense ingredients
    ("T", "bunch", 0.0625), // tablespoon to bunch for herbs
    ("t", "Gal.", 0.00130208),
    ("t", "qt.", 0.00520833),
    ("t", "pt.", 0.0104167),
    ("t", "C", 0.0208333),
    ("t", "oz.", 0.166667),
    ("t", "T", 0.333333),
    ("t", "L", 0.00492892),
    ("t", "mL", 4.92892),
    ("t", "lb", 0.0104167), // approximate for dense ingredients like salt
    // ========================================================================
    // Weight
    // ========================================================================
    ("lb", "oz.", 16.0),
    ("lb", "g", 453.592),
    ("lb", "Kg", 0.453592),
    ("lb", "Gal.", 0.125), // weight-to-volume
    ("lb", "qt.", 0.5),
    ("lb", "pt.", 1.0),
    ("lb", "C", 2.0),
    ("lb", "T", 32.0), // weight-to-volume for dense ingredients
    ("lb", "t", 96.0),
    ("lb", "L", 0.453592),
    ("lb", "mL", 453.592),
    ("oz.", "g", 28.3495),
    ("g", "lb", 0.00220462),
    ("g", "oz.", 0.035274),
    ("Kg", "lb", 2.20462),
    ("L", "Gal.", 0.264172),
    ("L", "qt.", 1.05669),
    ("L", "pt.", 2.11338),
    ("L", "C", 4.22675),
    ("L", "oz.", 33.814),
    ("L", "T", 67.628),
    ("L", "t", 202.884),
    ("L", "lb", 2.20462),
    ("L", "mL", 1000.0),
    ("mL", "Gal.", 0.000264172),
    ("mL", "qt.", 0.00105669),
    ("mL", "pt.", 0.00211338),
    ("mL", "C", 0.00422675),
    ("mL", "oz.", 0.033814),
    ("mL", "T", 0.067628),
    ("mL", "t", 0.202884),
    ("mL", "lb", 0.00220462),
    ("mL", "L", 0.001),
    // ========================================================================
    // Count
    // ========================================================================
    ("doz.", "ea", 12.0),
    ("ea", "doz.", 0.0833333),
    ("case", "ea", 24.0),
    ("ea", "case", 0.0416667),
    // ========================================================================
    // Special
    // ========================================================================
    ("clove", "lb", 0.02),
    ("lb", "clove", 50.0),
    ("tbsp", "clove", 3.0), // 1 clove is about 3 tbsp when minced
    ("bunch", "t", 70.0),
    ("t", "bunch", 0.0142857),
    ("bunch", "T", 16.0), // 1 bunch is about 16 tbsp for herbs
    ("loaf", "slice", 15.0),
    ("slice", "loaf", 0.0666667),
    // ========================================================================
    // Cans (standard #10 can)
    // ========================================================================
    ("can", "oz.", 106.0), // #10 can = 106 oz
    ("oz.", "can", 0.00943396),
    ("can", "C", 13.25), // #10 can = 13.25 cups
    ("C", "can", 0.0754717),
    // ========================================================================
    // Produce
    // ========================================================================
    ("head", "ea", 1.0), // head = each for lettuce/cabbage
    ("ea", "head", 1.0),
    // Approximate average weights
    ("ea-cucumber", "oz", 3.5), // Persian cucumber ~3.5 oz
    ("oz", "ea-cucumber", 0.2857),
    ("ea-plum-tomato", "oz", 2.5), // plum tomato ~2.5 oz
    ("oz", "ea-plum-tomato", 0.4),
    ("ea-tomato", "oz", 5.0), // regular tomato ~5 oz
    ("oz", "ea-tomato", 0.2),
    ("ea-olive", "oz", 0.15), // cocktail olive ~0.15 oz, about 100 per lb
    ("oz", "ea-olive", 6.67),
    ("ea-lemon", "oz", 3.5), // average lemon ~3.5 oz
    ("oz", "ea-lemon", 0.2857),
    ("ea-shrimp-16-20", "lb", 0.0556), // 16/20 count, about 18 per lb
    ("lb", "ea-shrimp-16-20", 18.0),
    // Count unit equivalencies
    ("pieces", "each", 1.0),
    ("each", "pieces", 1.0),
    ("piece", "each", 1.0),
    ("each", "piece", 1.0),
    ("pieces", "ea", 1.0),
    ("ea", "pieces", 1.0),
    ("piece", "ea", 1.0),
    ("ea", "piece", 1.0),
    // ========================================================================
    // Culinary small measures
    // ========================================================================
    ("pinch", "t", 0.0625), // 1/16 tsp
    ("t", "pinch", 16.0),
    ("sprinkle", "t", 0.125), // 1/8 tsp
    ("t", "sprinkle", 8.0),
    ("dash", "t", 0.125), // 1/8 tsp
    ("t", "dash", 8.0),
    ("drizzle", "T", 0.5), // 1/2 tbsp
    ("T", "drizzle", 2.0),
    ("dollop", "T", 1.0),
    ("T", "dollop", 1.0),
    ("garnish", "t", 0.25), // 1/4 tsp
    ("t", "garnish", 4.0),
    ("sprig", "t", 0.125), // 1/8 tsp
    ("t", "sprig", 8.0),
    ("dust", "t", 0.0625), // 1/16 tsp
    ("t", "dust", 16.0),
    ("smear", "t", 0.5), // 1/2 tsp
    ("t", "smear", 2.0),
    ("quenelle", "T", 1.0),
    ("T", "quenelle", 1.0),
    // ========================================================================
    // Fractional produce
    // ========================================================================
    ("wedge", "ea", 0.25), // 1 wedge = 1/4 of a whole
    ("ea", "wedge", 4.0),
    ("half", "ea", 0.5),
    ("ea", "half", 2.0),
    ("quarter", "ea", 0.25),
    ("ea", "quarter", 4.0),
    ("slice", "ea", 0.0625), // approximate: 16 slices per whole
    ("ea", "slice", 16.0),
];

/// Informal, plural, and abbreviated spellings mapped to the canonical
/// spelling used as factor-table endpoints.
pub const UNIT_ALIASES: &[(&str, &str)] = &[
    // Tablespoon / teaspoon
    ("tbsp", "T"),
    ("tablespoon", "T"),
    ("tablespoons", "T"),
    ("tsp", "t"),
    ("teaspoon", "t"),
    ("teaspoons", "t"),
    // Volume
    ("c", "C"),
    ("cup", "C"),
    ("cups", "C"),
    ("ounce", "oz."),
    ("ounces", "oz."),
    ("oz", "oz."),
    ("gal", "Gal."),
    ("gallon", "Gal."),
    ("gallons", "Gal."),
    ("qt", "qt."),
    ("quart", "qt."),
    ("quarts", "qt."),
    ("pt", "pt."),
    ("pint", "pt."),
    ("pints", "pt."),
    // Weight
    ("pound", "lb"),
    ("pounds", "lb"),
    // Count
    ("each", "ea"),
    ("eaches", "ea"),
    ("doz", "doz."),
    ("dozen", "doz."),
];

/// High-connectivity units tried, in order, as the intermediate for
/// one-hop chaining. The first hub with both legs resolvable wins.
pub const CHAIN_HUBS: &[&str] = &["t", "T", "C", "oz.", "oz", "lb", "Gal.", "gal", "ea"];
