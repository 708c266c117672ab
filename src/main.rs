use clap::Parser;

mod cli;
mod config;
mod contract;
mod utils;
mod wait;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    cli::Cli::parse().run().await
}
