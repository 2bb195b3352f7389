mod cli;
mod logging;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::cli::{Cli, normalize_args};

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    Cli::parse_from(normalize_args(std::env::args_os())).run()
}
