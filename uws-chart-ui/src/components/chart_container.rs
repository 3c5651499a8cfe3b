//! Plotly chart placeholder.

use crate::js_bridge;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Plotly renders into
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 450)]
    pub min_height: u32,
}

/// An empty div that Plotly fills in; the plot is purged when the
/// container unmounts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&id));

    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
