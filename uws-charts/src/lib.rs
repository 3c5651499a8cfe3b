//! Chart builders for the station dashboard.
//!
//! Each builder is a pure function of the read-only [`uws_db::Database`]
//! and the current control values. It returns a typed chart that
//! serializes to a Plotly figure via [`PlotlyFigure`]. Identical inputs
//! always produce identical figures.
//!
//! - [`bar::region_bar_chart`]: station count per selected region
//! - [`map::station_map`]: stations filtered by region and elevation
//! - [`layout::DashboardLayout`]: control configuration derived once from the dataset

pub mod bar;
pub mod figure;
pub mod layout;
pub mod map;

pub use bar::{region_bar_chart, BarChart};
pub use figure::PlotlyFigure;
pub use layout::{DashboardLayout, RegionOption, SliderConfig};
pub use map::{station_map, StationMap};
