//! Shell errors

use thiserror::Error;
use unitconv_core::{Category, ConversionError};

/// Errors surfaced by the shell and the one-shot commands
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A 1-based unit number outside the category's menu
    #[error("invalid {category} unit number {number} (expected 1..={count})",
        count = .category.unit_count())]
    UnitNumber { category: Category, number: i64 },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
