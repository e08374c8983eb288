//! Index-based conversion API
//!
//! Callers that select units by position (menus, raw integer input) use
//! these functions. Out-of-range indices are reported as
//! `ConversionError::InvalidUnit`, never as a NaN result.

use std::fmt;
use serde::{Serialize, Serializer};
use crate::{length_unit_name, weight_unit_name};
use crate::{Category, ConversionError, LengthUnit, Unit, WeightUnit};

fn resolve<U: Unit>(index: i64) -> Result<U, ConversionError> {
    U::from_index(index).ok_or(ConversionError::InvalidUnit {
        category: U::CATEGORY,
        index,
    })
}

fn convert_indexed<U: Unit>(value: f64, from: i64, to: i64) -> Result<f64, ConversionError> {
    let from = resolve::<U>(from)?;
    let to = resolve::<U>(to)?;
    Ok(from.convert_to(value, to))
}

/// Convert `value` between two units of `category`, selected by index.
///
/// `value` is not range-checked: NaN and infinities pass through the
/// arithmetic like any other value.
pub fn convert(category: Category, value: f64, from: i64, to: i64) -> Result<f64, ConversionError> {
    match category {
        Category::Length => convert_indexed::<LengthUnit>(value, from, to),
        Category::Weight => convert_indexed::<WeightUnit>(value, from, to),
    }
}

/// Check whether `index` names a unit of `category`
pub fn is_valid_unit(category: Category, index: i64) -> bool {
    match category {
        Category::Length => LengthUnit::from_index(index).is_some(),
        Category::Weight => WeightUnit::from_index(index).is_some(),
    }
}

/// Display name for a unit index. Out-of-range indices get the category's
/// "unknown" label instead of an error.
pub fn unit_name(category: Category, index: i64) -> &'static str {
    match category {
        Category::Length => length_unit_name(index),
        Category::Weight => weight_unit_name(index),
    }
}

/// JSON has no infinity or NaN, so those are written as the strings
/// `"inf"`, `"-inf"` and `"NaN"`. Finite values stay numbers.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_infinite() {
        serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
    } else {
        serializer.serialize_f64(*value)
    }
}

/// A completed conversion: the request and its result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub category: Category,
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,
    /// Display name of the source unit
    pub from: &'static str,
    /// Display name of the target unit
    pub to: &'static str,
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
}

impl Conversion {
    /// Run a conversion by index and keep the request alongside the result
    pub fn new(category: Category, value: f64, from: i64, to: i64) -> Result<Self, ConversionError> {
        let result = convert(category, value, from, to)?;
        Ok(Conversion {
            category,
            value,
            from: unit_name(category, from),
            to: unit_name(category, to),
            result,
        })
    }
}

impl fmt::Display for Conversion {
    /// `{:.N}` applies N decimals to both numbers; default is 6
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(f, "{:.*} {} = {:.*} {}",
            precision, self.value, self.from,
            precision, self.result, self.to)
    }
}
