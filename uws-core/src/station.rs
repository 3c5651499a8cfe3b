use anyhow::{bail, Context};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

/// Header names the station CSV must carry.
///
/// Columns are matched by name, so their order is free and any extra
/// columns in the file are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = ["region", "elevation", "latitude", "longitude", "name"];

/// One weather observation point from the station dataset.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Station name, shown as hover text on the map
    pub name: String,
    /// Region the station belongs to (e.g. "Highlands")
    pub region: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Elevation in metres
    pub elevation: f64,
}

impl Station {
    /// Parse a CSV string of station data into a vector of Stations.
    ///
    /// Expected CSV columns (by header name): region, elevation, latitude, longitude, name
    ///
    /// Fails on the first malformed record; there is no partial load.
    pub fn parse_station_csv(csv_object: &str) -> anyhow::Result<Vec<Station>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());

        let headers = rdr
            .headers()
            .context("failed to read station CSV header")?
            .clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            bail!(
                "station CSV is missing required column(s): {}",
                missing.join(", ")
            );
        }

        let mut station_list: Vec<Station> = Vec::new();
        for (index, row) in rdr.deserialize::<Station>().enumerate() {
            let row_number = index + 1;
            let station =
                row.with_context(|| format!("malformed station record at data row {}", row_number))?;
            station
                .validate()
                .with_context(|| format!("invalid station record at data row {}", row_number))?;
            station_list.push(station);
        }
        log::debug!("[UWS] station: parsed {} station records", station_list.len());
        Ok(station_list)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.region.is_empty() {
            bail!("station {:?} has an empty region", self.name);
        }
        if !self.elevation.is_finite() {
            bail!("station {:?} has a non-finite elevation", self.name);
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            bail!("station {:?} has latitude {} out of range", self.name, self.latitude);
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            bail!("station {:?} has longitude {} out of range", self.name, self.longitude);
        }
        Ok(())
    }
}
