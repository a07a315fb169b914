use clap::Parser;
use huffstego_core::HuffstegoError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, HuffstegoError>;

fn main() -> CliResult<()> {
    env_logger::init();
    let args = CliArgs::parse();
    log::debug!("{args:?}");

    match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::Compare(args) => args.run(),
    }
}
