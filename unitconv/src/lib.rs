//! Unitconv - Interactive Length and Weight Converter
//!
//! Terminal front end for `unitconv-core`:
//! - `Shell`: the menu-driven session (banner, category menu, unit prompts)
//! - `Prompter`: validated line input over any reader/writer pair
//! - `commands`: single conversions and unit listings for scripted use
//!
//! All user-facing messages live here; the engine only returns values.

mod config;
mod error;
mod input;
mod shell;
pub mod commands;

pub use config::{ShellConfig, DEFAULT_PRECISION, MAX_PRECISION};
pub use error::ShellError;
pub use input::Prompter;
pub use shell::{category_title, Shell};
