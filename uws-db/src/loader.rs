//! One-shot CSV loading into the station table.
//!
//! # CSV Format
//!
//! Header row required, columns matched by name:
//! `region,elevation,latitude,longitude,name`

use crate::Database;
use rusqlite::params;
use uws_core::Station;

impl Database {
    /// Parse the station CSV and insert every record in file order.
    ///
    /// Only called while building the [`Database`]; the table is never
    /// written to afterwards.
    pub(crate) fn load_stations(&self, csv_data: &str) -> anyhow::Result<usize> {
        let stations = Station::parse_station_csv(csv_data)?;

        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO stations (name, region, latitude, longitude, elevation)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for station in &stations {
                stmt.execute(params![
                    station.name,
                    station.region,
                    station.latitude,
                    station.longitude,
                    station.elevation
                ])?;
            }
        }
        tx.commit()?;

        log::info!("[UWS] loader: Loaded {} stations", stations.len());
        Ok(stations.len())
    }
}
