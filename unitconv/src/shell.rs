//! Interactive menu loop
//!
//! The shell only talks to the engine through `Conversion::new` (which calls
//! `convert`) and `unit_name`. Units are chosen by their 1-based menu number.

use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};
use unitconv_core::{unit_name, Category, Conversion};
use crate::{Prompter, ShellConfig, ShellError};

const BANNER_RULE: &str = "============================================================";
const BANNER_TITLE: &str = "             Unit Converter (Length & Weight)               ";

/// Menu heading for a category
pub fn category_title(category: Category) -> &'static str {
    match category {
        Category::Length => "Length",
        Category::Weight => "Weight",
    }
}

pub struct Shell<R, W, E = io::Stderr> {
    prompter: Prompter<R, W, E>,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Shell::with_error_output(input, output, io::stderr(), config)
    }
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    /// Like `new`, with input errors written to `errors` instead of stderr
    pub fn with_error_output(input: R, output: W, errors: E, config: ShellConfig) -> Self {
        Shell {
            prompter: Prompter::with_error_output(input, output, errors),
            config,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    pub fn into_parts(self) -> (W, E) {
        self.prompter.into_parts()
    }

    /// Run until the user picks Exit or input runs out
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!(precision = self.config.precision, "unit converter started");

        loop {
            self.print_banner()?;
            self.print_main_menu()?;

            let max_choice = Category::ALL.len() as i64;
            let Some(choice) = self.prompter.prompt_int("Select an option: ", 0, max_choice)? else {
                break;
            };

            if choice == 0 {
                writeln!(self.prompter.output(), "Exiting Unit Converter. Goodbye!")?;
                break;
            }

            match Category::ALL.get((choice - 1) as usize) {
                Some(&category) => self.run_conversion(category)?,
                None => writeln!(self.prompter.output(), "Unknown option. Please try again.")?,
            }

            write!(self.prompter.output(), "Press ENTER to continue...")?;
            self.prompter.output().flush()?;
            self.prompter.read_line();
        }

        info!("unit converter finished");
        Ok(())
    }

    fn print_banner(&mut self) -> Result<(), ShellError> {
        let out = self.prompter.output();
        writeln!(out, "{}", BANNER_RULE)?;
        writeln!(out, "{}", BANNER_TITLE)?;
        writeln!(out, "{}", BANNER_RULE)?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<(), ShellError> {
        let out = self.prompter.output();
        writeln!(out, "\nMain Menu:")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(out, "  {}) {} conversion", i + 1, category_title(*category))?;
        }
        writeln!(out, "  0) Exit\n")?;
        Ok(())
    }

    fn print_units(&mut self, category: Category) -> Result<(), ShellError> {
        let out = self.prompter.output();
        writeln!(out, "\n{} Units:", category_title(category))?;
        for index in 0..category.unit_count() {
            writeln!(out, "  {}) {}", index + 1, unit_name(category, index as i64))?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn run_conversion(&mut self, category: Category) -> Result<(), ShellError> {
        self.print_units(category)?;

        let count = category.unit_count() as i64;
        let Some(from) = self.prompter.prompt_int("Select source unit (number): ", 1, count)? else {
            return Ok(());
        };
        let Some(to) = self.prompter.prompt_int("Select target unit (number): ", 1, count)? else {
            return Ok(());
        };
        let Some(value) = self.prompter.prompt_f64("Enter value to convert: ")? else {
            return Ok(());
        };

        match Conversion::new(category, value, from - 1, to - 1) {
            Ok(conversion) => {
                debug!(%category, value, from, to, result = conversion.result, "converted");
                let out = self.prompter.output();
                writeln!(out, "\nResult:")?;
                writeln!(out, "  {:.*}\n", self.config.decimals(), conversion)?;
            }
            Err(e) => {
                warn!(error = %e, "conversion rejected");
                writeln!(self.prompter.output(), "Conversion error: invalid units.")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> String {
        run_session_with(input, ShellConfig::default())
    }

    fn run_session_with(input: &str, config: ShellConfig) -> String {
        let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config);
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let out = run_session("0\n");
        assert!(out.starts_with(BANNER_RULE));
        assert!(out.contains("  1) Length conversion\n  2) Weight conversion\n  0) Exit\n"));
        assert!(out.ends_with("Exiting Unit Converter. Goodbye!\n"));
        assert!(!out.contains("Press ENTER"));
    }

    #[test]
    fn test_end_of_input_at_main_menu() {
        let out = run_session("");
        assert!(out.ends_with("Select an option: "));
    }

    #[test]
    fn test_miles_to_kilometers_session() {
        let out = run_session("1\n8\n2\n5\n\n0\n");
        assert!(out.contains("\nLength Units:\n  1) meter (m)\n"));
        assert!(out.contains("  8) mile (mi)\n"));
        assert!(out.contains("\nResult:\n  5.000000 mile (mi) = 8.046720 kilometer (km)\n\n"));
        assert!(out.contains("Press ENTER to continue..."));
        assert!(out.ends_with("Exiting Unit Converter. Goodbye!\n"));
    }

    #[test]
    fn test_ounces_to_pounds_session() {
        let out = run_session("2\n5\n4\n16\n\n0\n");
        assert!(out.contains("\nWeight Units:\n  1) kilogram (kg)\n"));
        assert!(out.contains("  16.000000 ounce (oz) = 1.000000 pound (lb)"));
    }

    #[test]
    fn test_precision_setting() {
        let out = run_session_with("1\n2\n1\n1.5\n\n0\n", ShellConfig { precision: 2 });
        assert!(out.contains("  1.50 kilometer (km) = 1500.00 meter (m)"));
    }

    #[test]
    fn test_invalid_menu_choices_reprompt() {
        let out = run_session("x\n7\n0\n");
        assert!(out.contains("Invalid input. Please enter an integer."));
        assert!(out.contains("Please enter a value between 0 and 2."));
        assert!(out.ends_with("Exiting Unit Converter. Goodbye!\n"));
    }

    #[test]
    fn test_unit_number_out_of_range_reprompts() {
        let out = run_session("2\n7\n1\n2\n3\n\n0\n");
        assert!(out.contains("Please enter a value between 1 and 6."));
        assert!(out.contains("  3.000000 kilogram (kg) = 3000.000000 gram (g)"));
    }

    #[test]
    fn test_end_of_input_reported_once_per_abandoned_prompt() {
        let input = Cursor::new(b"1\n1\n".to_vec());
        let mut shell = Shell::with_error_output(input, Vec::new(), Vec::new(), ShellConfig::default());
        shell.run().unwrap();
        let (out, errors) = shell.into_parts();
        let out = String::from_utf8(out).unwrap();
        let errors = String::from_utf8(errors).unwrap();
        assert!(!out.contains("Error:"));
        // target unit prompt, then the main menu after "Press ENTER"
        assert_eq!(errors, "Error: failed to read input.\nError: failed to read input.\n");
    }

    #[test]
    fn test_end_of_input_mid_conversion() {
        let out = run_session("1\n1\n");
        assert!(out.contains("Select target unit (number): "));
        assert!(!out.contains("Result:"));
        assert!(out.contains("Press ENTER to continue..."));
    }

    #[test]
    fn test_several_conversions_in_one_session() {
        let out = run_session("1\n1\n3\n1\n\n2\n1\n2\n1\n\n0\n");
        assert!(out.contains("  1.000000 meter (m) = 100.000000 centimeter (cm)"));
        assert!(out.contains("  1.000000 kilogram (kg) = 1000.000000 gram (g)"));
        assert_eq!(out.matches("Main Menu:").count(), 3);
    }
}
