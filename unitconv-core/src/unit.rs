//! Unit trait shared by the closed unit enumerations

use std::fmt;
use crate::Category;

/// A member of a closed unit enumeration with a scale factor relative to
/// its category's base unit.
///
/// `factor` is expressed in base units per one unit of this kind, so
/// `value_base = value * factor`.
pub trait Unit: Copy + Eq + fmt::Debug + 'static {
    /// Category every member belongs to
    const CATEGORY: Category;

    /// Members in menu order; `ALL[u.index()] == u`
    const ALL: &'static [Self];

    /// Member whose factor is exactly 1.0
    const BASE: Self;

    /// Position in `ALL`
    fn index(self) -> usize;

    /// Base units per one of this unit
    fn factor(self) -> f64;

    /// Display name with abbreviation, e.g. "kilometer (km)"
    fn name(self) -> &'static str;

    /// Standard abbreviation, e.g. "km"
    fn symbol(self) -> &'static str;

    /// Look up a member by its enumeration index. Out-of-range and negative
    /// indices yield `None`.
    fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Convert a value in this unit to the base unit
    fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Convert a value in the base unit to this unit
    fn from_base(self, value_base: f64) -> f64 {
        value_base / self.factor()
    }

    /// Convert a value from this unit to another unit of the same category
    fn convert_to(self, value: f64, target: Self) -> f64 {
        target.from_base(self.to_base(value))
    }
}

/// Convert `value` from one unit to another.
///
/// Always goes through the base unit (one multiply, one divide) rather than
/// a direct pairwise factor.
pub fn convert_units<U: Unit>(value: f64, from: U, to: U) -> f64 {
    from.convert_to(value, to)
}
