//! Weight units - base unit kilogram (kg)

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::{Category, ConversionError, Unit};

/// Weight units in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kilogram = 0,
    Gram,
    Milligram,
    Pound,
    Ounce,
    Tonne,
}

/// Kilograms per weight unit, indexed by `WeightUnit as usize`
pub static WEIGHT_FACTORS: [f64; WeightUnit::COUNT] = [
    1.0,           // kilogram
    0.001,         // gram
    0.000001,      // milligram
    0.45359237,    // pound
    0.0283495231,  // ounce
    1000.0,        // tonne (metric ton)
];

/// Returned by `weight_unit_name` for out-of-range indices
const UNKNOWN_WEIGHT_UNIT: &str = "Unknown weight unit";

static ALIASES: &[(&str, WeightUnit)] = &[
    ("kg", WeightUnit::Kilogram),
    ("kilogram", WeightUnit::Kilogram),
    ("kilograms", WeightUnit::Kilogram),
    ("g", WeightUnit::Gram),
    ("gram", WeightUnit::Gram),
    ("grams", WeightUnit::Gram),
    ("mg", WeightUnit::Milligram),
    ("milligram", WeightUnit::Milligram),
    ("milligrams", WeightUnit::Milligram),
    ("lb", WeightUnit::Pound),
    ("lbs", WeightUnit::Pound),
    ("pound", WeightUnit::Pound),
    ("pounds", WeightUnit::Pound),
    ("oz", WeightUnit::Ounce),
    ("ounce", WeightUnit::Ounce),
    ("ounces", WeightUnit::Ounce),
    ("t", WeightUnit::Tonne),
    ("tonne", WeightUnit::Tonne),
    ("tonnes", WeightUnit::Tonne),
    ("metric ton", WeightUnit::Tonne),
];

impl WeightUnit {
    /// Number of weight units
    pub const COUNT: usize = 6;
}

impl Unit for WeightUnit {
    const CATEGORY: Category = Category::Weight;

    const ALL: &'static [Self] = &[
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Milligram,
        WeightUnit::Pound,
        WeightUnit::Ounce,
        WeightUnit::Tonne,
    ];

    const BASE: Self = WeightUnit::Kilogram;

    fn index(self) -> usize {
        self as usize
    }

    fn factor(self) -> f64 {
        WEIGHT_FACTORS[self as usize]
    }

    fn name(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kilogram (kg)",
            WeightUnit::Gram => "gram (g)",
            WeightUnit::Milligram => "milligram (mg)",
            WeightUnit::Pound => "pound (lb)",
            WeightUnit::Ounce => "ounce (oz)",
            WeightUnit::Tonne => "tonne (t)",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Gram => "g",
            WeightUnit::Milligram => "mg",
            WeightUnit::Pound => "lb",
            WeightUnit::Ounce => "oz",
            WeightUnit::Tonne => "t",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|&(_, unit)| unit)
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: Category::Weight,
                text: s.to_string(),
            })
    }
}

/// Convert a weight from one unit to another
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    from.convert_to(value, to)
}

/// Display name for a weight unit index, or "Unknown weight unit"
pub fn weight_unit_name(index: i64) -> &'static str {
    WeightUnit::from_index(index)
        .map(WeightUnit::name)
        .unwrap_or(UNKNOWN_WEIGHT_UNIT)
}
