//! Deepjar CLI - lists nested JAR/ZIP archives as a tree.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    output::configure_colors(cli.color);
    logging::init(cli.verbose);

    let reporter = output::HumanReporter::new();
    commands::list::execute(&cli, &reporter)
}
