//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the chart
//! builders and printed by the CLI as JSON.

use serde::Serialize;

/// Number of stations in one region.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionCount {
    pub region: String,
    pub count: u32,
}

/// Lowest and highest station elevation in the dataset, in metres.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ElevationBounds {
    pub min: f64,
    pub max: f64,
}

/// Whole-dataset figures used to configure the dashboard controls.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    pub station_count: u32,
    pub region_count: u32,
    pub elevation: ElevationBounds,
}
