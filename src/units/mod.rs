//! Unit conversion module
//!
//! Converts culinary quantities between units through a curated factor
//! table with alias normalization and one-hop chaining.

pub mod converter;
pub mod registry;

pub use converter::{ConversionError, ConversionResult, UnitConverter};
pub use registry::{CHAIN_HUBS, CONVERSION_FACTORS, UNIT_ALIASES};
