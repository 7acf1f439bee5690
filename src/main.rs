use anyhow::Result;
use buildscout::cli::Cli;
use buildscout::output;
use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    output::print_banner();

    let cli = Cli::parse();
    info!("Starting buildscout {}", env!("CARGO_PKG_VERSION"));
    cli.execute().await?;

    Ok(())
}
