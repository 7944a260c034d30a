//! `hashira` prints the coefficients of the monic polynomial whose roots
//! are given in a JSON document.
//!
//! **Usage:**
//! ```text
//! hashira [INPUT] [--ascending] [-v...]
//! ```
//!
//! Reads stdin when `INPUT` is omitted or `-`. Coefficients are printed
//! highest degree first on a single line. Diagnostics go to stderr and
//! follow `RUST_LOG` when it is set.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hashira::input::parse_input;
use hashira::reconstruct::reconstruct;

/// Reconstruct a monic polynomial from roots written in bases 2 to 36.
#[derive(Parser)]
#[command(name = "hashira", version, about)]
struct Args {
    /// JSON input file (default: stdin).
    input: Option<PathBuf>,

    /// Print the constant term first instead of the leading term.
    #[arg(long)]
    ascending: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let text = read_input(args.input.as_ref())?;
    let input = parse_input(&text)?;
    let line = match reconstruct(&input)? {
        Some(poly) if args.ascending => poly.to_ascending_string(),
        Some(poly) => poly.to_descending_string(),
        None => String::new(),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}").context("failed to write output")?;
    Ok(())
}
