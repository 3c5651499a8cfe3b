//! Core types for the UK weather observation station dataset.

pub mod station;

pub use station::{Station, REQUIRED_COLUMNS};
