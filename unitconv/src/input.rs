//! Line-based prompting over any `BufRead`/`Write` pair

use std::io::{self, BufRead, Write};
use tracing::{debug, warn};
use crate::ShellError;

/// Reads one answer per line and re-prompts until the answer is usable.
///
/// Every prompt returns `Ok(None)` when input is exhausted and reports that
/// on the error writer (stderr unless one is supplied). Errors are only
/// returned for failed writes.
pub struct Prompter<R, W, E = io::Stderr> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter::with_error_output(input, output, io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    pub fn with_error_output(input: R, output: W, errors: E) -> Self {
        Prompter { input, output, errors }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn into_parts(self) -> (W, E) {
        (self.output, self.errors)
    }

    /// Read one line without its line terminator.
    ///
    /// End of input and unreadable input both yield `None`.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input");
                None
            }
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(e) => {
                warn!(error = %e, "failed to read input");
                None
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let line = self.read_line();
        if line.is_none() {
            warn!(prompt = prompt.trim_end(), "no answer before end of input");
            writeln!(self.errors, "Error: failed to read input.")?;
        }
        Ok(line)
    }

    /// Prompt for an integer in `min..=max`
    pub fn prompt_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<Option<i64>, ShellError> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };

            let value = match line.trim().parse::<i64>() {
                Ok(v) => v,
                Err(_) => {
                    debug!(input = %line, "rejected non-integer input");
                    writeln!(self.output, "Invalid input. Please enter an integer.")?;
                    continue;
                }
            };

            if value < min || value > max {
                debug!(value, min, max, "rejected out-of-range input");
                writeln!(self.output, "Please enter a value between {} and {}.", min, max)?;
                continue;
            }

            return Ok(Some(value));
        }
    }

    /// Prompt for a real number. `inf` and `nan` are accepted as written.
    pub fn prompt_f64(&mut self, prompt: &str) -> Result<Option<f64>, ShellError> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };

            match line.trim().parse::<f64>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => {
                    debug!(input = %line, "rejected non-numeric input");
                    writeln!(self.output, "Invalid input. Please enter a numeric value.")?;
                }
            }
        }
    }
}
