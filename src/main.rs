use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use supplement_scrape::config::{load_config, Cli, USAGE};
use supplement_scrape::scrape_listing;
use supplement_scrape::utilities::logger::init_logger;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            println!("{}", USAGE);
            return;
        }
        Err(_) => {
            eprintln!("{}", USAGE.red());
            std::process::exit(2);
        }
    };

    init_logger();

    if let Err(e) = run(cli).await {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;

    scrape_listing(&config, cli.product, cli.sort_type)
        .await
        .with_context(|| format!("Failed to scrape {:?} listing", cli.product))?;

    Ok(())
}
