//! Length units - base unit meter (m)

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::{Category, ConversionError, Unit};

/// Length units in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meter = 0,
    Kilometer,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
    Yard,
    Mile,
}

/// Meters per length unit, indexed by `LengthUnit as usize`
pub static LENGTH_FACTORS: [f64; LengthUnit::COUNT] = [
    1.0,       // meter
    1000.0,    // kilometer
    0.01,      // centimeter
    0.001,     // millimeter
    0.0254,    // inch
    0.3048,    // foot
    0.9144,    // yard
    1609.344,  // mile
];

/// Returned by `length_unit_name` for out-of-range indices
const UNKNOWN_LENGTH_UNIT: &str = "Unknown length unit";

static ALIASES: &[(&str, LengthUnit)] = &[
    ("m", LengthUnit::Meter),
    ("meter", LengthUnit::Meter),
    ("meters", LengthUnit::Meter),
    ("metre", LengthUnit::Meter),
    ("metres", LengthUnit::Meter),
    ("km", LengthUnit::Kilometer),
    ("kilometer", LengthUnit::Kilometer),
    ("kilometers", LengthUnit::Kilometer),
    ("kilometre", LengthUnit::Kilometer),
    ("kilometres", LengthUnit::Kilometer),
    ("cm", LengthUnit::Centimeter),
    ("centimeter", LengthUnit::Centimeter),
    ("centimeters", LengthUnit::Centimeter),
    ("centimetre", LengthUnit::Centimeter),
    ("centimetres", LengthUnit::Centimeter),
    ("mm", LengthUnit::Millimeter),
    ("millimeter", LengthUnit::Millimeter),
    ("millimeters", LengthUnit::Millimeter),
    ("millimetre", LengthUnit::Millimeter),
    ("millimetres", LengthUnit::Millimeter),
    ("in", LengthUnit::Inch),
    ("inch", LengthUnit::Inch),
    ("inches", LengthUnit::Inch),
    ("ft", LengthUnit::Foot),
    ("foot", LengthUnit::Foot),
    ("feet", LengthUnit::Foot),
    ("yd", LengthUnit::Yard),
    ("yard", LengthUnit::Yard),
    ("yards", LengthUnit::Yard),
    ("mi", LengthUnit::Mile),
    ("mile", LengthUnit::Mile),
    ("miles", LengthUnit::Mile),
];

impl LengthUnit {
    /// Number of length units
    pub const COUNT: usize = 8;
}

impl Unit for LengthUnit {
    const CATEGORY: Category = Category::Length;

    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    const BASE: Self = LengthUnit::Meter;

    fn index(self) -> usize {
        self as usize
    }

    fn factor(self) -> f64 {
        LENGTH_FACTORS[self as usize]
    }

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Meter => "meter (m)",
            LengthUnit::Kilometer => "kilometer (km)",
            LengthUnit::Centimeter => "centimeter (cm)",
            LengthUnit::Millimeter => "millimeter (mm)",
            LengthUnit::Inch => "inch (in)",
            LengthUnit::Foot => "foot (ft)",
            LengthUnit::Yard => "yard (yd)",
            LengthUnit::Mile => "mile (mi)",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = ConversionError;

    /// Parse a symbol or a singular/plural unit name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|&(_, unit)| unit)
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: Category::Length,
                text: s.to_string(),
            })
    }
}

/// Convert a length from one unit to another
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from.convert_to(value, to)
}

/// Display name for a length unit index, or "Unknown length unit"
pub fn length_unit_name(index: i64) -> &'static str {
    LengthUnit::from_index(index)
        .map(LengthUnit::name)
        .unwrap_or(UNKNOWN_LENGTH_UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}", expected, actual
        );
    }

    #[test]
    fn test_factor_table_invariants() {
        assert_eq!(LENGTH_FACTORS.len(), LengthUnit::ALL.len());
        assert_eq!(LENGTH_FACTORS[LengthUnit::Meter as usize], 1.0);
        for factor in LENGTH_FACTORS {
            assert!(factor > 0.0);
        }
    }

    #[test]
    fn test_fixed_points() {
        assert_eq!(convert_length(1.0, LengthUnit::Meter, LengthUnit::Centimeter), 100.0);
        assert_eq!(convert_length(1.0, LengthUnit::Kilometer, LengthUnit::Meter), 1000.0);
        assert_close(convert_length(1.0, LengthUnit::Mile, LengthUnit::Meter), 1609.344);
        assert_close(convert_length(1.0, LengthUnit::Foot, LengthUnit::Inch), 12.0);
        assert_close(convert_length(1.0, LengthUnit::Yard, LengthUnit::Foot), 3.0);
    }

    #[test]
    fn test_miles_to_kilometers() {
        // 5 * 1609.344 / 1000
        assert_close(convert_length(5.0, LengthUnit::Mile, LengthUnit::Kilometer), 8.04672);
    }

    #[test]
    fn test_names() {
        assert_eq!(length_unit_name(0), "meter (m)");
        assert_eq!(length_unit_name(1), "kilometer (km)");
        assert_eq!(length_unit_name(7), "mile (mi)");
        assert_eq!(length_unit_name(8), "Unknown length unit");
        assert_eq!(length_unit_name(-1), "Unknown length unit");
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("km".parse::<LengthUnit>(), Ok(LengthUnit::Kilometer));
        assert_eq!("Feet".parse::<LengthUnit>(), Ok(LengthUnit::Foot));
        assert_eq!(" metres ".parse::<LengthUnit>(), Ok(LengthUnit::Meter));
        assert!("furlong".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_every_symbol_parses_back() {
        for &unit in LengthUnit::ALL {
            assert_eq!(unit.symbol().parse::<LengthUnit>(), Ok(unit));
        }
    }
}
