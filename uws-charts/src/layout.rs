//! Declarative dashboard layout, built once from the loaded dataset.

use serde::Serialize;
use uws_db::Database;

pub const PAGE_TITLE: &str = "Weather Observation Points UK";
pub const HEADING: &str = "Uk Weather Observation Stations";
pub const SLIDER_CAPTION: &str = "Slide to change Elevation";

/// DOM ids of the controls and chart placeholders.
pub const REGION_CONTROL_ID: &str = "region-check-boxes";
pub const ELEVATION_SLIDER_ID: &str = "elevation-slider";
pub const STATIONS_GRAPH_ID: &str = "stations-graph";
pub const REGIONS_BAR_GRAPH_ID: &str = "regions-bar-graph";

/// Elevation slider step, in metres.
pub const SLIDER_STEP: f64 = 10.0;

/// One selectable entry of the region control.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionOption {
    pub label: String,
    pub value: String,
}

/// Elevation slider bounds and starting value.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Everything the UI needs to draw its controls.
///
/// Region options follow the dataset's region enumeration order and start
/// unselected. The slider spans the dataset's elevation range and starts
/// at half the highest elevation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardLayout {
    pub title: String,
    pub station_count: u32,
    pub region_options: Vec<RegionOption>,
    pub initial_selection: Vec<String>,
    pub slider: SliderConfig,
}

impl DashboardLayout {
    pub fn from_database(db: &Database) -> anyhow::Result<Self> {
        let region_options = db
            .query_regions()?
            .into_iter()
            .map(|region| RegionOption {
                label: region.clone(),
                value: region,
            })
            .collect();
        let summary = db.query_summary()?;
        let bounds = summary.elevation;

        Ok(Self {
            title: HEADING.to_string(),
            station_count: summary.station_count,
            region_options,
            initial_selection: Vec::new(),
            slider: SliderConfig {
                min: bounds.min,
                max: bounds.max,
                step: SLIDER_STEP,
                default: bounds.max / 2.0,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Database {
        Database::from_csv(
            "\
region,elevation,latitude,longitude,name
Wales,216,53.09,-3.94,Capel Curig
Highlands,1237,57.12,-3.64,Cairngorm Summit
Wales,10,53.25,-4.54,Valley
Grampian,65,57.21,-2.20,Aberdeen Dyce
",
        )
        .unwrap()
    }

    #[test]
    fn region_options_in_dataset_order() {
        let layout = DashboardLayout::from_database(&sample_db()).unwrap();
        let values: Vec<&str> = layout
            .region_options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["Wales", "Highlands", "Grampian"]);
        assert!(layout.region_options.iter().all(|o| o.label == o.value));
    }

    #[test]
    fn initial_selection_is_empty() {
        let layout = DashboardLayout::from_database(&sample_db()).unwrap();
        assert!(layout.initial_selection.is_empty());
        assert_eq!(layout.station_count, 4);
    }

    #[test]
    fn slider_spans_elevation_range() {
        let layout = DashboardLayout::from_database(&sample_db()).unwrap();
        assert_eq!(layout.slider.min, 10.0);
        assert_eq!(layout.slider.max, 1237.0);
        assert_eq!(layout.slider.step, 10.0);
        assert_eq!(layout.slider.default, 618.5);
    }

    #[test]
    fn layout_is_stable_across_builds() {
        let db = sample_db();
        assert_eq!(
            DashboardLayout::from_database(&db).unwrap(),
            DashboardLayout::from_database(&db).unwrap()
        );
    }
}
