//! Reusable Dioxus RSX components for the station dashboard.

mod chart_container;
mod chart_header;
mod elevation_slider;
mod error_display;
mod loading_spinner;
mod region_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use elevation_slider::ElevationSlider;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use region_selector::RegionSelector;
