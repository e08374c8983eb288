//! Unitconv command line
//!
//! Without a subcommand the interactive converter runs on stdin/stdout.
//! Logs go to stderr and are controlled by `RUST_LOG` (default `warn`).

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use unitconv::commands::{convert_command, render_conversion, render_units};
use unitconv::{Shell, ShellConfig};
use unitconv_core::Category;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert values between units of length and weight")]
struct Cli {
    #[command(flatten)]
    config: ShellConfig,

    /// Print one-shot results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single value and print the result.
    Convert {
        /// Unit category: length or weight.
        category: Category,
        /// Value to convert.
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit: symbol, name, or 1-based menu number.
        from: String,
        /// Target unit: symbol, name, or 1-based menu number.
        to: String,
    },
    /// List the units of a category with their factors.
    Units {
        /// Unit category: length or weight.
        category: Category,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        None => run_interactive(cli.config),
        Some(Command::Convert { category, value, from, to }) => {
            handle_convert(&cli.config, cli.json, category, value, &from, &to)
        }
        Some(Command::Units { category }) => handle_units(cli.json, category),
    }
}

fn run_interactive(config: ShellConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
    shell.run().context("interactive session failed")
}

fn handle_convert(
    config: &ShellConfig,
    json: bool,
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<()> {
    let conversion = convert_command(category, value, from, to)
        .with_context(|| format!("cannot convert {} from '{}' to '{}'", category, from, to))?;
    info!(%category, value, result = conversion.result, "converted");
    println!("{}", render_conversion(&conversion, config, json)?);
    Ok(())
}

fn handle_units(json: bool, category: Category) -> Result<()> {
    println!("{}", render_units(category, json)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .init();
}
