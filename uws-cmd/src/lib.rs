//! Command implementations for the UWS CLI.
//!
//! Every command loads the station dataset once, then prints either
//! CSV rows or a Plotly figure as JSON to stdout.

use clap::Subcommand;
use std::io::Write;
use uws_db::Database;

pub mod figure;
pub mod inspect;

/// Hard-coded dataset location, relative to the workspace root.
pub const DEFAULT_DATASET: &str = "fixtures/location_detail_final_v3.csv";

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List every region with its station count, in dataset order
    Regions,

    /// Print station count, elevation bounds and slider configuration
    Summary,

    /// Print the stations passing the region and elevation filters as CSV
    Stations {
        /// Region to include (repeat for several)
        #[arg(short = 'r', long = "region")]
        regions: Vec<String>,

        /// Elevation threshold in metres (defaults to the slider default)
        #[arg(short = 'e', long)]
        max_elevation: Option<f64>,
    },

    /// Print the station-count bar chart figure as JSON
    Bar {
        /// Region to include (repeat for several)
        #[arg(short = 'r', long = "region")]
        regions: Vec<String>,
    },

    /// Print the station map figure as JSON
    Map {
        /// Region to include (repeat for several)
        #[arg(short = 'r', long = "region")]
        regions: Vec<String>,

        /// Elevation threshold in metres (defaults to the slider default)
        #[arg(short = 'e', long)]
        max_elevation: Option<f64>,
    },
}

/// Load the dataset at `csv_path` and run `command`, writing to stdout.
pub fn run(csv_path: &str, command: Command) -> anyhow::Result<()> {
    let db = Database::open(csv_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&db, command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run `command` against an already loaded table.
pub fn execute(db: &Database, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Regions => inspect::write_regions(db, out),
        Command::Summary => inspect::write_summary(db, out),
        Command::Stations {
            regions,
            max_elevation,
        } => inspect::write_stations(db, &regions, max_elevation, out),
        Command::Bar { regions } => figure::write_bar_chart(db, &regions, out),
        Command::Map {
            regions,
            max_elevation,
        } => figure::write_station_map(db, &regions, max_elevation, out),
    }
}

/// Threshold to use when none was given: the slider's starting value.
pub(crate) fn default_threshold(db: &Database) -> anyhow::Result<f64> {
    Ok(uws_charts::DashboardLayout::from_database(db)?.slider.default)
}
