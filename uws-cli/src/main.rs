//! UWS CLI - Command line tool for inspecting the station dataset and chart figures.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "uws-cli",
    version,
    about = "UK weather observation station toolkit"
)]
struct Cli {
    /// Path to the station dataset CSV
    #[arg(long, global = true, default_value = uws_cmd::DEFAULT_DATASET)]
    csv: String,

    #[command(subcommand)]
    command: uws_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[UWS] cli: using dataset {}", cli.csv);
    uws_cmd::run(&cli.csv, cli.command)
}
