//! Larder
//!
//! Recipe and plate costing for food service: culinary unit conversion,
//! per-line pricing, and prep-factor / Q-factor surcharge composition.

pub mod catalog;
pub mod costing;
pub mod models;
pub mod units;
