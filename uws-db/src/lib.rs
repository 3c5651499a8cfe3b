//! In-memory SQLite table of UK weather observation stations.
//!
//! The station CSV is loaded exactly once, when the [`Database`] is built.
//! After that the table is read-only: the only public methods are typed
//! queries, and every filter returns a fresh result set.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the dashboard crate,
//!   or read from disk by the CLI
//! - Typed query methods returning serializable structs
//!
//! # Usage
//!
//! ```rust
//! use uws_db::Database;
//!
//! let db = Database::from_csv(
//!     "region,elevation,latitude,longitude,name\nWales,216,53.09,-3.94,Capel Curig\n",
//! )
//! .unwrap();
//!
//! let regions = db.query_regions().unwrap();
//! assert_eq!(regions, vec!["Wales".to_string()]);
//! let stations = db.query_stations(&regions, 500.0).unwrap();
//! assert_eq!(stations.len(), 1);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// Read-only station table backed by an in-memory SQLite database.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Build the station table from CSV text.
    ///
    /// Fails if the CSV is malformed or holds no stations: the dashboard
    /// cannot bound its elevation slider without at least one row.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::empty()?;
        let count = db.load_stations(csv_data)?;
        if count == 0 {
            anyhow::bail!("station dataset contains no records");
        }
        Ok(db)
    }

    /// Read and load a station CSV file from disk.
    pub fn open(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let csv_data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read station dataset {}", path.display()))?;
        Self::from_csv(&csv_data)
            .with_context(|| format!("failed to load station dataset {}", path.display()))
    }

    fn empty() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_STATION: &str =
        "region,elevation,latitude,longitude,name\nWales,216,53.09,-3.94,Capel Curig\n";

    #[test]
    fn database_loads_successfully() {
        let db = Database::from_csv(ONE_STATION);
        assert!(db.is_ok(), "Database should load without errors");
    }

    #[test]
    fn database_rejects_empty_dataset() {
        let db = Database::from_csv("region,elevation,latitude,longitude,name\n");
        assert!(db.is_err(), "A dataset with no rows cannot configure the dashboard");
    }

    #[test]
    fn database_rejects_malformed_csv() {
        assert!(Database::from_csv("region,name\nWales,Capel Curig\n").is_err());
    }

    #[test]
    fn database_open_missing_file_fails() {
        let err = Database::open("does/not/exist.csv").err().unwrap();
        assert!(err.to_string().contains("does/not/exist.csv"));
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::from_csv(ONE_STATION).unwrap();
        let db2 = db.clone();
        assert_eq!(
            db.query_summary().unwrap(),
            db2.query_summary().unwrap(),
            "Clone should see same data via shared Rc"
        );
    }
}
