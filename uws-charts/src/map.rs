//! Geographic scatter map of the filtered stations.

use crate::figure::{thermal_colorscale, PlotlyFigure};
use serde::Serialize;
use serde_json::{json, Value};
use uws_core::Station;
use uws_db::Database;

/// Stable Plotly `uirevision` so pan/zoom survives redraws.
const MAP_UI_REVISION: &str = "stations-graph";
/// Fixed viewport center (longitude, latitude) over the British Isles.
const MAP_CENTER: (f64, f64) = (-5.0, 55.0);

/// Stations that passed the region and elevation filters, in CSV order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationMap {
    pub stations: Vec<Station>,
}

/// Keep stations in the selected regions, then those at or below
/// `max_elevation`.
///
/// With no region selected the map is empty; the threshold only narrows
/// a region selection.
pub fn station_map(
    db: &Database,
    selected: &[String],
    max_elevation: f64,
) -> anyhow::Result<StationMap> {
    let stations = db.query_stations(selected, max_elevation)?;
    Ok(StationMap { stations })
}

impl PlotlyFigure for StationMap {
    fn to_plotly(&self) -> Value {
        let lat: Vec<f64> = self.stations.iter().map(|s| s.latitude).collect();
        let lon: Vec<f64> = self.stations.iter().map(|s| s.longitude).collect();
        let text: Vec<&str> = self.stations.iter().map(|s| s.name.as_str()).collect();
        let elevation: Vec<f64> = self.stations.iter().map(|s| s.elevation).collect();

        json!({
            "data": [{
                "type": "scattergeo",
                "lat": lat,
                "lon": lon,
                "text": text,
                "marker": {
                    "color": elevation,
                    "colorscale": thermal_colorscale(),
                    "reversescale": true,
                    "opacity": 0.7,
                    "size": 3,
                    "colorbar": {
                        "title": { "text": "Elevation", "side": "top" },
                        "outlinecolor": "rgba(68, 68, 68, 0)",
                        "ticks": "outside",
                        "showticksuffix": "last",
                        "dtick": 100,
                    },
                },
            }],
            "layout": {
                "uirevision": MAP_UI_REVISION,
                "geo": {
                    "domain": { "x": [0, 1], "y": [0, 1] },
                    "scope": "europe",
                    "showland": true,
                    "landcolor": "rgb(212, 212, 212)",
                    "subunitcolor": "rgb(255, 255, 255)",
                    "countrycolor": "rgb(255, 255, 255)",
                    "showlakes": true,
                    "lakecolor": "rgb(255, 255, 255)",
                    "showsubunits": true,
                    "showcountries": true,
                    "resolution": 50,
                    "uirevision": MAP_UI_REVISION,
                    "projection": { "type": "robinson" },
                    "center": { "lon": MAP_CENTER.0, "lat": MAP_CENTER.1 },
                },
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
North,120,57.1,-2.1,Dyce
South,15,50.8,-1.1,Portsmouth
South,85,51.0,-1.3,Winchester
North,340,57.5,-4.2,Inverness Hill
East,30,52.6,1.3,Norwich
",
        )
        .unwrap()
    }

    fn all_regions(db: &Database) -> Vec<String> {
        db.query_regions().unwrap()
    }

    #[test]
    fn empty_selection_shows_no_stations() {
        let db = sample_db();
        let map = station_map(&db, &[], 10_000.0).unwrap();
        assert!(map.stations.is_empty());
        assert_eq!(map.to_plotly()["data"][0]["lat"], json!([]));
    }

    #[test]
    fn threshold_at_max_shows_every_station() {
        let db = sample_db();
        let max = db.query_elevation_bounds().unwrap().max;
        for threshold in [max, max + 0.5, max * 10.0] {
            let map = station_map(&db, &all_regions(&db), threshold).unwrap();
            assert_eq!(map.stations.len(), 5, "threshold {}", threshold);
        }
    }

    #[test]
    fn threshold_below_min_shows_nothing() {
        let db = sample_db();
        let min = db.query_elevation_bounds().unwrap().min;
        for threshold in [min - 0.1, min - 100.0, f64::MIN] {
            let map = station_map(&db, &all_regions(&db), threshold).unwrap();
            assert!(map.stations.is_empty(), "threshold {}", threshold);
        }
    }

    #[test]
    fn region_filter_applies_before_elevation() {
        let db = sample_db();
        let map = station_map(&db, &["North".to_string()], 200.0).unwrap();
        let names: Vec<&str> = map.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Dyce"]);
    }

    #[test]
    fn same_inputs_give_same_figure() {
        let db = sample_db();
        let selection = vec!["South".to_string(), "East".to_string()];
        let first = station_map(&db, &selection, 50.0).unwrap().to_json();
        let second = station_map(&db, &selection, 50.0).unwrap().to_json();
        assert_eq!(first, second);
    }

    #[test]
    fn marker_color_encodes_elevation() {
        let db = sample_db();
        let figure = station_map(&db, &["South".to_string()], 100.0)
            .unwrap()
            .to_plotly();
        let trace = &figure["data"][0];
        assert_eq!(trace["type"], "scattergeo");
        assert_eq!(trace["text"], json!(["Portsmouth", "Winchester"]));
        assert_eq!(trace["marker"]["color"], json!([15.0, 85.0]));
        assert_eq!(trace["marker"]["reversescale"], true);
    }

    #[test]
    fn viewport_is_fixed_to_europe() {
        let db = sample_db();
        let narrow = station_map(&db, &["East".to_string()], 100.0).unwrap().to_plotly();
        let wide = station_map(&db, &all_regions(&db), 1000.0).unwrap().to_plotly();
        assert_eq!(narrow["layout"], wide["layout"]);
        assert_eq!(narrow["layout"]["geo"]["scope"], "europe");
        assert_eq!(narrow["layout"]["geo"]["projection"]["type"], "robinson");
        assert_eq!(narrow["layout"]["geo"]["center"]["lon"], -5.0);
        assert_eq!(narrow["layout"]["geo"]["center"]["lat"], 55.0);
    }
}
