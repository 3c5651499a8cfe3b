//! Dataset inspection commands.

use crate::default_threshold;
use std::io::Write;
use uws_charts::DashboardLayout;
use uws_db::Database;

/// Write `region,count` rows for every region.
pub fn write_regions(db: &Database, out: &mut impl Write) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for count in db.query_region_counts()? {
        wtr.serialize(&count)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the dataset summary and control layout as pretty JSON.
pub fn write_summary(db: &Database, out: &mut impl Write) -> anyhow::Result<()> {
    let summary = serde_json::json!({
        "dataset": db.query_summary()?,
        "layout": DashboardLayout::from_database(db)?,
    });
    serde_json::to_writer_pretty(&mut *out, &summary)?;
    writeln!(out)?;
    Ok(())
}

/// Write the filtered stations as CSV, in dataset order.
pub fn write_stations(
    db: &Database,
    regions: &[String],
    max_elevation: Option<f64>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let threshold = match max_elevation {
        Some(threshold) => threshold,
        None => default_threshold(db)?,
    };
    let stations = db.query_stations(regions, threshold)?;
    log::info!(
        "[UWS] stations: {} match {} region(s) at or below {} m",
        stations.len(),
        regions.len(),
        threshold
    );

    let mut wtr = csv::Writer::from_writer(out);
    for station in &stations {
        wtr.serialize(station)?;
    }
    wtr.flush()?;
    Ok(())
}
