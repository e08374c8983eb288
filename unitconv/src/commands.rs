//! One-shot commands: a single conversion or a unit listing

use serde::Serialize;
use unitconv_core::{is_valid_unit, Category, Conversion, LengthUnit, Unit, WeightUnit};
use crate::{ShellConfig, ShellError};

/// One row of the `units` listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitInfo {
    /// 1-based menu number
    pub number: usize,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Base units per one of this unit
    pub factor: f64,
}

fn unit_infos<U: Unit>() -> Vec<UnitInfo> {
    U::ALL
        .iter()
        .map(|&unit| UnitInfo {
            number: unit.index() + 1,
            symbol: unit.symbol(),
            name: unit.name(),
            factor: unit.factor(),
        })
        .collect()
}

/// Every unit of a category in menu order
pub fn unit_table(category: Category) -> Vec<UnitInfo> {
    match category {
        Category::Length => unit_infos::<LengthUnit>(),
        Category::Weight => unit_infos::<WeightUnit>(),
    }
}

/// Turn a unit argument into an engine index.
///
/// Integers are 1-based menu numbers; one outside the menu is reported with
/// the number as typed. Anything else is looked up as a symbol or unit name.
pub fn resolve_unit(category: Category, text: &str) -> Result<i64, ShellError> {
    if let Ok(number) = text.trim().parse::<i64>() {
        let index = number.saturating_sub(1);
        if !is_valid_unit(category, index) {
            return Err(ShellError::UnitNumber { category, number });
        }
        return Ok(index);
    }
    let index = match category {
        Category::Length => text.parse::<LengthUnit>()?.index(),
        Category::Weight => text.parse::<WeightUnit>()?.index(),
    };
    Ok(index as i64)
}

/// Resolve both unit arguments and run the conversion
pub fn convert_command(category: Category, value: f64, from: &str, to: &str) -> Result<Conversion, ShellError> {
    let from = resolve_unit(category, from)?;
    let to = resolve_unit(category, to)?;
    Ok(Conversion::new(category, value, from, to)?)
}

pub fn render_conversion(conversion: &Conversion, config: &ShellConfig, json: bool) -> Result<String, ShellError> {
    if json {
        return Ok(serde_json::to_string_pretty(conversion)?);
    }
    Ok(format!("{:.*}", config.decimals(), conversion))
}

pub fn render_units(category: Category, json: bool) -> Result<String, ShellError> {
    let table = unit_table(category);
    if json {
        return Ok(serde_json::to_string_pretty(&table)?);
    }
    let lines: Vec<String> = table
        .iter()
        .map(|u| format!("  {}) {} = {} {}", u.number, u.name, u.factor, base_symbol(category)))
        .collect();
    Ok(lines.join("\n"))
}

fn base_symbol(category: Category) -> &'static str {
    match category {
        Category::Length => LengthUnit::BASE.symbol(),
        Category::Weight => WeightUnit::BASE.symbol(),
    }
}
