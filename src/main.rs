//! treemenu CLI - build, inspect and toggle lineage-addressed tree menus
//!
//! Usage: treemenu <COMMAND>
//!
//! Commands:
//!   show      Build a tree and print its outline
//!   toggle    Toggle a property at one or more lineages
//!   lineages  Print every node's lineage and label

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    if let Err(err) = commands::run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`.
fn install_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
