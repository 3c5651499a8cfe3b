//! UK Weather Observation Stations dashboard
//!
//! Shows UK weather observation stations on a map of Europe, filtered by
//! region and elevation, next to a bar chart of station counts per region.
//!
//! Data flow:
//! 1. `build.rs` checks the station CSV header and copies the file into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into a read-only in-memory SQLite table and
//!    the control layout (region options, slider bounds) is derived from it.
//! 4. Two effects act as the chart callbacks: the bar chart re-renders when
//!    the region selection changes, the map when the selection or the
//!    elevation threshold changes.
//!
//! `dx serve` hosts the app locally; debug builds hot-reload and log at
//! DEBUG level.

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use uws_chart_ui::components::{
    ChartContainer, ChartHeader, ElevationSlider, ErrorDisplay, LoadingSpinner, RegionSelector,
};
use uws_chart_ui::js_bridge;
use uws_chart_ui::state::AppState;
use uws_charts::layout::{PAGE_TITLE, REGIONS_BAR_GRAPH_ID, STATIONS_GRAPH_ID};
use uws_charts::{region_bar_chart, station_map, DashboardLayout, PlotlyFigure};
use uws_db::Database;

/// Station dataset, embedded at build time.
const STATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/location_detail_final_v3.csv"));

/// Plotly.js bundle the chart bridge renders with.
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the table once on mount
    use_effect(move || match load_dataset() {
        Ok((db, layout)) => {
            log::info!(
                "[UWS] dashboard: {} stations in {} regions, elevation {}..{} m",
                layout.station_count,
                layout.region_options.len(),
                layout.slider.min,
                layout.slider.max
            );
            js_bridge::init_charts();
            state.install(db, layout);
        }
        Err(e) => state.fail(format!("{:#}", e)),
    });

    // Bar chart: depends on the region selection only
    use_effect(move || {
        let selected = state.selected_regions.read().clone();
        let Some(db) = state.db.read().clone() else {
            return;
        };
        match region_bar_chart(&db, &selected) {
            Ok(chart) => js_bridge::render_figure(REGIONS_BAR_GRAPH_ID, &chart.to_json()),
            Err(e) => log::error!("[UWS] dashboard: bar chart failed: {:#}", e),
        }
    });

    // Map: depends on the region selection and the elevation threshold
    use_effect(move || {
        let selected = state.selected_regions.read().clone();
        let elevation = (state.elevation)();
        let Some(db) = state.db.read().clone() else {
            return;
        };
        match station_map(&db, &selected, elevation) {
            Ok(map) => {
                log::debug!(
                    "[UWS] dashboard: map shows {} stations at or below {} m",
                    map.stations.len(),
                    elevation
                );
                js_bridge::render_figure(STATIONS_GRAPH_ID, &map.to_json());
            }
            Err(e) => log::error!("[UWS] dashboard: station map failed: {:#}", e),
        }
    });

    let subtitle = state
        .layout
        .read()
        .as_ref()
        .map(|layout| {
            format!(
                "{} stations in {} regions",
                layout.station_count,
                layout.region_options.len()
            )
        })
        .unwrap_or_default();
    let heading = state
        .layout
        .read()
        .as_ref()
        .map(|layout| layout.title.clone())
        .unwrap_or_default();

    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Script { src: PLOTLY_JS }

        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartHeader { title: heading, subtitle }
                RegionSelector {}

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start;",
                    div {
                        style: "flex: 1 1 600px;",
                        ElevationSlider {}
                        ChartContainer {
                            id: STATIONS_GRAPH_ID.to_string(),
                            min_height: 600,
                        }
                    }
                    div {
                        style: "flex: 0 0 500px;",
                        ChartContainer {
                            id: REGIONS_BAR_GRAPH_ID.to_string(),
                            min_height: 500,
                        }
                    }
                }
            }
        }
    }
}

/// Build the read-only table and the control layout from the embedded CSV.
fn load_dataset() -> anyhow::Result<(Database, DashboardLayout)> {
    let db = Database::from_csv(STATIONS_CSV)?;
    let layout = DashboardLayout::from_database(&db)?;
    Ok((db, layout))
}
