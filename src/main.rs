use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write as _};

use greet::greeting::Greeting;

/// Print a greeting to standard output
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Name to greet (defaults to "World"); extra arguments are ignored
    #[arg(
        value_name = "NAME",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let greeting = Greeting::from_args(cli.args);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    greeting
        .write_line(&mut handle)
        .context("failed to write greeting to stdout")?;
    handle.flush().context("failed to flush stdout")?;

    Ok(())
}
