use clap::Parser;
use color_eyre::Result;

use courier_hours::{logging, run, Cli};

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    run(Cli::parse())
}
