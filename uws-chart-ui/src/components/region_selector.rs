//! Multi-select region control.

use crate::state::{toggle_region, AppState};
use dioxus::prelude::*;
use uws_charts::layout::REGION_CONTROL_ID;
use uws_charts::RegionOption;

/// One checkbox per region option, in dataset order.
/// Ticking or unticking a box updates `selected_regions` in AppState.
#[component]
pub fn RegionSelector() -> Element {
    let state = use_context::<AppState>();
    let options = state
        .layout
        .read()
        .as_ref()
        .map(|layout| layout.region_options.clone())
        .unwrap_or_default();

    rsx! {
        div {
            id: REGION_CONTROL_ID,
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 4px 16px;",
            for option in options {
                RegionCheckbox { key: "{option.value}", option: option.clone() }
            }
        }
    }
}

#[component]
fn RegionCheckbox(option: RegionOption) -> Element {
    let mut state = use_context::<AppState>();
    let checked = state
        .selected_regions
        .read()
        .iter()
        .any(|r| *r == option.value);
    let value = option.value.clone();

    let on_change = move |_: Event<FormData>| {
        toggle_region(&mut state.selected_regions.write(), &value);
    };

    rsx! {
        label {
            style: "white-space: nowrap; cursor: pointer;",
            input {
                r#type: "checkbox",
                value: "{option.value}",
                checked,
                onchange: on_change,
            }
            " {option.label}"
        }
    }
}
