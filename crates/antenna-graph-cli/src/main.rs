//! Antenna graph CLI.
//!
//! Non-interactive front end for the antenna-graph engine. Each subcommand
//! loads a graph from a grid-text or binary file and runs one engine
//! operation; no algorithmic logic lives here.
//!
//! # Exit codes
//!
//! - 0: success
//! - 1: recoverable error (bad input, missing file, missing antenna)
//! - 2: corrupted binary payload

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// Antenna grid graph toolkit.
#[derive(Parser)]
#[command(name = "antenna-graph")]
#[command(version)]
#[command(about = "Traversal, path enumeration, harmonic intersections, and persistence for antenna grids")]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            error::exit_code_for(&err)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
