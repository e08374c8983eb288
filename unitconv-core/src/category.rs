//! Unit categories

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::{ConversionError, LengthUnit, Unit, WeightUnit};

/// A closed grouping of units measuring the same physical quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: meter
    Length,
    /// Base unit: kilogram
    Weight,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 2] = [Category::Length, Category::Weight];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
        }
    }

    /// Number of enumerated units in this category
    pub fn unit_count(self) -> usize {
        match self {
            Category::Length => LengthUnit::COUNT,
            Category::Weight => WeightUnit::COUNT,
        }
    }

    /// Display name of the unit whose factor is exactly 1.0
    pub fn base_unit_name(self) -> &'static str {
        match self {
            Category::Length => LengthUnit::BASE.name(),
            Category::Weight => WeightUnit::BASE.name(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "l" => Ok(Category::Length),
            "weight" | "mass" | "w" => Ok(Category::Weight),
            _ => Err(ConversionError::UnknownCategory(s.to_string())),
        }
    }
}
