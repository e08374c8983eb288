//! Conversion errors
//!
//! Errors are values returned to the caller. The engine never prints them.

use thiserror::Error;
use crate::Category;

/// Errors that can occur during unit conversion or unit lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A unit index outside the category's enumeration
    #[error("invalid {category} unit index {index} (expected 0..{count})",
        count = .category.unit_count())]
    InvalidUnit { category: Category, index: i64 },

    /// Unit text that matches no symbol or name in the category
    #[error("unknown {category} unit: {text}")]
    UnknownUnit { category: Category, text: String },

    /// Category text that matches no known category
    #[error("unknown unit category: {0}")]
    UnknownCategory(String),
}

impl ConversionError {
    /// True for the out-of-range index case
    pub fn is_invalid_unit(&self) -> bool {
        matches!(self, ConversionError::InvalidUnit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_unit_display() {
        let err = ConversionError::InvalidUnit { category: Category::Length, index: 8 };
        assert_eq!(err.to_string(), "invalid length unit index 8 (expected 0..8)");
        assert!(err.is_invalid_unit());
    }

    #[test]
    fn test_unknown_unit_display() {
        let err = ConversionError::UnknownUnit {
            category: Category::Weight,
            text: "stone".to_string(),
        };
        assert_eq!(err.to_string(), "unknown weight unit: stone");
        assert!(!err.is_invalid_unit());
    }
}
