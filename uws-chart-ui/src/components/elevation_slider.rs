//! Elevation threshold slider.

use crate::state::AppState;
use dioxus::prelude::*;
use uws_charts::layout::{ELEVATION_SLIDER_ID, SLIDER_CAPTION};

/// Range input bounded by the dataset's elevation range.
/// Updates `elevation` in AppState while dragging.
#[component]
pub fn ElevationSlider() -> Element {
    let mut state = use_context::<AppState>();
    let Some(slider) = state.layout.read().as_ref().map(|layout| layout.slider) else {
        return rsx! {};
    };
    let value = (state.elevation)();
    let readout = format!(
        "Stations at or below {:.0} m ({:.0}–{:.0} m)",
        value, slider.min, slider.max
    );

    let on_input = move |evt: Event<FormData>| {
        if let Ok(elevation) = evt.value().parse::<f64>() {
            state.elevation.set(elevation);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            p {
                style: "margin: 0 0 4px 0;",
                "{SLIDER_CAPTION}"
            }
            input {
                id: ELEVATION_SLIDER_ID,
                r#type: "range",
                min: "{slider.min}",
                max: "{slider.max}",
                step: "{slider.step}",
                value: "{value}",
                style: "width: 100%;",
                oninput: on_input,
            }
            span {
                style: "font-size: 12px; color: #666;",
                "{readout}"
            }
        }
    }
}
