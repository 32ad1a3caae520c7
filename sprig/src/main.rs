mod commands;
mod config;
mod convention;
mod ops;
mod prompt;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    cli.run()
}
