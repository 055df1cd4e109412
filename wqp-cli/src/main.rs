//! WQP CLI - Water pollutant prediction and drinking water safety check.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wqp-cli",
    version,
    about = "Water pollutant prediction and drinking water safety toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wqp_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wqp_cmd::run(cli.command)
}
