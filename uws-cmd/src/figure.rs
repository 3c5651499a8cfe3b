//! Chart figure commands.

use crate::default_threshold;
use std::io::Write;
use uws_charts::{region_bar_chart, station_map, PlotlyFigure};
use uws_db::Database;

/// Write the bar chart figure for `regions`.
pub fn write_bar_chart(
    db: &Database,
    regions: &[String],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let chart = region_bar_chart(db, regions)?;
    write_figure(&chart, out)
}

/// Write the station map figure for `regions` and the elevation threshold.
pub fn write_station_map(
    db: &Database,
    regions: &[String],
    max_elevation: Option<f64>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let threshold = match max_elevation {
        Some(threshold) => threshold,
        None => default_threshold(db)?,
    };
    let map = station_map(db, regions, threshold)?;
    write_figure(&map, out)
}

fn write_figure(figure: &impl PlotlyFigure, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &figure.to_plotly())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests::output;
    use crate::Command;

    #[test]
    fn bar_prints_plotly_figure() {
        let json: serde_json::Value = serde_json::from_str(&output(Command::Bar {
            regions: vec!["South".to_string(), "North".to_string(), "South".to_string()],
        }))
        .unwrap();
        assert_eq!(json["data"][0]["x"], serde_json::json!(["North", "South"]));
        assert_eq!(json["data"][0]["y"], serde_json::json!([2, 1]));
    }

    #[test]
    fn map_prints_filtered_points() {
        let json: serde_json::Value = serde_json::from_str(&output(Command::Map {
            regions: vec!["North".to_string()],
            max_elevation: Some(400.0),
        }))
        .unwrap();
        assert_eq!(
            json["data"][0]["text"],
            serde_json::json!(["Dyce", "Inverness Hill"])
        );
        assert_eq!(json["layout"]["geo"]["scope"], "europe");
    }
}
