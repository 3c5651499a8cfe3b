//! Shared Dioxus components and Plotly.js bridge for the station dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly.js calls via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (region checkboxes, elevation slider, containers)

pub mod js_bridge;
pub mod state;
pub mod components;
