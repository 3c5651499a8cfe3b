//! Typed query methods over the station table.
//!
//! # Region Enumeration Order
//!
//! Region-keyed results are ordered by each region's first appearance in
//! the CSV, the same order the region control lists its options in.

use crate::models::{DatasetSummary, ElevationBounds, RegionCount};
use crate::Database;
use rusqlite::types::Value;
use rusqlite::params_from_iter;
use uws_core::Station;

impl Database {
    /// Distinct region names in enumeration order.
    pub fn query_regions(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT region FROM stations
             GROUP BY region
             ORDER BY MIN(row_id)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Station count for every region across the whole dataset, in
    /// enumeration order.
    pub fn query_region_counts(&self) -> anyhow::Result<Vec<RegionCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT region, COUNT(*) FROM stations
             GROUP BY region
             ORDER BY MIN(row_id)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RegionCount {
                    region: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[UWS] query: query_region_counts returned {} regions",
            rows.len()
        );
        Ok(rows)
    }

    /// Lowest and highest station elevation.
    pub fn query_elevation_bounds(&self) -> anyhow::Result<ElevationBounds> {
        let conn = self.conn.borrow();
        let (min, max): (Option<f64>, Option<f64>) = conn.query_row(
            "SELECT MIN(elevation), MAX(elevation) FROM stations",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        match (min, max) {
            (Some(min), Some(max)) => Ok(ElevationBounds { min, max }),
            _ => anyhow::bail!("no stations loaded"),
        }
    }

    /// Station count, region count and elevation bounds.
    pub fn query_summary(&self) -> anyhow::Result<DatasetSummary> {
        let (station_count, region_count): (u32, u32) = {
            let conn = self.conn.borrow();
            conn.query_row(
                "SELECT COUNT(*), COUNT(DISTINCT region) FROM stations",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?
        };
        Ok(DatasetSummary {
            station_count,
            region_count,
            elevation: self.query_elevation_bounds()?,
        })
    }

    /// Stations in any of `regions` whose elevation is at most `max_elevation`.
    ///
    /// Repeated region names are ignored. An empty region list selects
    /// nothing, whatever the threshold. Results are in CSV row order.
    pub fn query_stations(
        &self,
        regions: &[String],
        max_elevation: f64,
    ) -> anyhow::Result<Vec<Station>> {
        let mut unique: Vec<&str> = Vec::with_capacity(regions.len());
        for region in regions {
            if !unique.contains(&region.as_str()) {
                unique.push(region.as_str());
            }
        }
        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = (1..=unique.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT name, region, latitude, longitude, elevation FROM stations
             WHERE region IN ({}) AND elevation <= ?{}
             ORDER BY row_id",
            placeholders,
            unique.len() + 1
        );

        let mut values: Vec<Value> = unique
            .iter()
            .map(|region| Value::Text(region.to_string()))
            .collect();
        values.push(Value::Real(max_elevation));

        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values), |row| {
                Ok(Station {
                    name: row.get(0)?,
                    region: row.get(1)?,
                    latitude: row.get(2)?,
                    longitude: row.get(3)?,
                    elevation: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[UWS] query: query_stations({} regions, <= {}) returned {} records",
            unique.len(),
            max_elevation,
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    /// Regions appear in the order North, South, East; South has the most rows.
    fn sample_db() -> Database {
        Database::from_csv(
            "\
region,elevation,latitude,longitude,name
North,120,57.1,-2.1,Dyce
South,15,50.8,-1.1,Portsmouth
South,85,51.0,-1.3,Winchester
North,340,57.5,-4.2,Inverness Hill
South,5,50.7,-1.9,Bournemouth
East,30,52.6,1.3,Norwich
South,210,51.2,-1.8,Salisbury Plain
",
        )
        .unwrap()
    }

    fn regions(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn query_regions_in_first_appearance_order() {
        let db = sample_db();
        assert_eq!(db.query_regions().unwrap(), regions(&["North", "South", "East"]));
    }

    #[test]
    fn query_region_counts_cover_whole_dataset() {
        let db = sample_db();
        let counts = db.query_region_counts().unwrap();
        let pairs: Vec<(&str, u32)> = counts.iter().map(|c| (c.region.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("North", 2), ("South", 4), ("East", 1)]);
    }

    #[test]
    fn query_elevation_bounds() {
        let db = sample_db();
        let bounds = db.query_elevation_bounds().unwrap();
        assert_eq!(bounds.min, 5.0);
        assert_eq!(bounds.max, 340.0);
    }

    #[test]
    fn query_summary() {
        let summary = sample_db().query_summary().unwrap();
        assert_eq!(summary.station_count, 7);
        assert_eq!(summary.region_count, 3);
        assert_eq!(summary.elevation.max, 340.0);
    }

    #[test]
    fn query_stations_filters_region_then_elevation() {
        let db = sample_db();
        let stations = db.query_stations(&regions(&["South"]), 100.0).unwrap();
        let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Portsmouth", "Winchester", "Bournemouth"]);
    }

    #[test]
    fn query_stations_threshold_is_inclusive() {
        let db = sample_db();
        let stations = db.query_stations(&regions(&["North"]), 120.0).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "Dyce");
    }

    #[test]
    fn query_stations_empty_selection_is_empty() {
        let db = sample_db();
        assert!(db.query_stations(&[], 10_000.0).unwrap().is_empty());
    }

    #[test]
    fn query_stations_tolerates_duplicates() {
        let db = sample_db();
        let once = db.query_stations(&regions(&["North"]), 1000.0).unwrap();
        let twice = db.query_stations(&regions(&["North", "North"]), 1000.0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn query_stations_unknown_region_is_empty() {
        let db = sample_db();
        assert!(db.query_stations(&regions(&["Atlantis"]), 1000.0).unwrap().is_empty());
    }

    #[test]
    fn query_stations_leaves_table_intact() {
        let db = sample_db();
        let before = db.query_summary().unwrap();
        let _ = db.query_stations(&regions(&["East"]), 0.0).unwrap();
        assert_eq!(db.query_summary().unwrap(), before);
    }

    #[test]
    fn shipped_fixture_loads() {
        let db = Database::from_csv(include_str!("../../fixtures/location_detail_final_v3.csv"))
            .unwrap();
        let summary = db.query_summary().unwrap();
        assert!(summary.station_count > 0);
        assert!(summary.elevation.min <= summary.elevation.max);
    }
}
