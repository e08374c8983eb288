//! Runtime configuration
//!
//! There are no configuration files; everything comes from the command line.

use clap::Args;

/// Decimals printed by `%f` in the classic converter output
pub const DEFAULT_PRECISION: u16 = 6;

/// Largest accepted `--precision`. An `f64` carries at most 17 significant
/// decimal digits.
pub const MAX_PRECISION: u16 = 17;

/// Output settings shared by the interactive shell and the one-shot commands
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ShellConfig {
    /// Number of decimals used when printing values (0-17).
    #[arg(
        long,
        default_value_t = DEFAULT_PRECISION,
        global = true,
        value_parser = clap::value_parser!(u16).range(0..=MAX_PRECISION as i64),
    )]
    pub precision: u16,
}

impl ShellConfig {
    /// Precision as a formatter argument, clamped to `MAX_PRECISION`
    pub fn decimals(&self) -> usize {
        usize::from(self.precision.min(MAX_PRECISION))
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig { precision: DEFAULT_PRECISION }
    }
}
