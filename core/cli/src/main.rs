mod args;
mod cli;
mod commands;
mod config;
mod utils;

use anyhow::Result;
use clap::Parser;

use crate::args::Args;
use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::new(Args::parse());

    // Create the tokio runtime and execute the cli
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(cli.exec())
}
