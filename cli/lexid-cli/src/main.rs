//! lexid - increment lexically ordered build numbers
//!
//! Prints the identifiers following a seed, one per line, or a
//! `lexical`/`numerical` table with `--debug`.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config);
    if !config.color {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
