//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The loaded [`Database`] and [`DashboardLayout`] are written once at
//! startup and only read afterwards; the two control signals are the only
//! state that changes while the dashboard runs.

use dioxus::prelude::*;
use uws_charts::DashboardLayout;
use uws_db::Database;

/// Shared application state for the station dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Station table (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Control configuration derived from the table (None until loaded)
    pub layout: Signal<Option<DashboardLayout>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Startup error, if the dataset failed to load
    pub error_msg: Signal<Option<String>>,
    /// Regions ticked in the region control, in click order
    pub selected_regions: Signal<Vec<String>>,
    /// Elevation slider value in metres
    pub elevation: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            layout: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_regions: Signal::new(Vec::new()),
            elevation: Signal::new(0.0),
        }
    }

    /// Install a loaded table and seed the controls from its layout.
    pub fn install(&mut self, db: Database, layout: DashboardLayout) {
        self.selected_regions.set(layout.initial_selection.clone());
        self.elevation.set(layout.slider.default);
        self.layout.set(Some(layout));
        self.db.set(Some(db));
        self.loading.set(false);
    }

    /// Record a fatal startup error; nothing else will be rendered.
    pub fn fail(&mut self, message: String) {
        log::error!("[UWS] {}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tick `region` if it is not selected, untick it otherwise.
pub fn toggle_region(selection: &mut Vec<String>, region: &str) {
    if selection.iter().any(|r| r == region) {
        selection.retain(|r| r != region);
    } else {
        selection.push(region.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_region;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Vec::new();
        toggle_region(&mut selection, "Wales");
        toggle_region(&mut selection, "Grampian");
        assert_eq!(selection, vec!["Wales".to_string(), "Grampian".to_string()]);
        toggle_region(&mut selection, "Wales");
        assert_eq!(selection, vec!["Grampian".to_string()]);
    }

    #[test]
    fn toggle_clears_repeated_entries() {
        let mut selection = vec!["Wales".to_string(), "Wales".to_string()];
        toggle_region(&mut selection, "Wales");
        assert!(selection.is_empty());
    }
}
