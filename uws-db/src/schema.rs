//! SQL schema for the in-memory station table.

/// Returns the full SQL schema as a single batch string.
///
/// `row_id` follows CSV row order, so `MIN(row_id)` per region gives the
/// region's first appearance in the dataset. Every ordered query relies on it.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS stations (
        row_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        region TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        elevation REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_stations_region ON stations(region);
    CREATE INDEX IF NOT EXISTS idx_stations_elevation ON stations(elevation);
    "#
}
