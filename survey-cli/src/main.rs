//! Survey CLI - Command line tool for survey statistics and submissions.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "survey-cli",
    version,
    about = "Community survey toolkit: statistics, area and unit surveys"
)]
struct Cli {
    #[command(flatten)]
    connection: survey_cmd::Connection,

    #[command(subcommand)]
    command: survey_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Using API at {}", cli.connection.base_url);
    survey_cmd::run(cli.connection, cli.command).await
}
