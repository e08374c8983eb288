//! Unitconv Core - Length and Weight Conversion Engine
//!
//! Table-driven conversion between units of one category. Every unit carries
//! a scale factor relative to its category's base unit, and every conversion
//! goes through that base unit.
//!
//! Categories:
//! - Length (m, km, cm, mm, in, ft, yd, mi), base unit meter
//! - Weight (kg, g, mg, lb, oz, t), base unit kilogram
//!
//! Nothing in this crate performs I/O, logs, or keeps mutable state.

mod category;
mod convert;
mod error;
mod length;
mod unit;
mod weight;

pub use category::Category;
pub use convert::{convert, is_valid_unit, unit_name, Conversion};
pub use error::ConversionError;
pub use length::{convert_length, length_unit_name, LengthUnit, LENGTH_FACTORS};
pub use unit::{convert_units, Unit};
pub use weight::{convert_weight, weight_unit_name, WeightUnit, WEIGHT_FACTORS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Category, ConversionError, LengthUnit, Unit, WeightUnit};
    pub use crate::{convert, unit_name};
}
