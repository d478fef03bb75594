use clap::Parser;
use color_eyre::eyre::{Report, Result};
use std::env;
use tripfetch::cli::verbosity::Verbosity;
use tripfetch::cli::{Cli, Command};
use tripfetch::dataset;

fn setup(verbosity: &Verbosity) -> Result<(), Report> {
    color_eyre::install()?;

    // Set default logging level if RUST_LOG is not set.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", verbosity.to_string())
    }

    env_logger::init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Parse CLI parameters
    let args = Cli::parse();

    // Misc setup actions like logging
    setup(&args.verbosity)?;

    match args.command {
        // Download trip record files over a range of months
        Command::Download(args) => {
            dataset::download::trip_data(&args).await?;
        }
        // List the available datasets
        Command::List(args) => {
            dataset::list::datasets(&args)?;
        }
    }

    Ok(())
}
