//! Plotly figure serialization shared by every chart.

use serde_json::Value;

/// A chart that can be rendered by Plotly.js.
///
/// `to_plotly` returns the `{ "data": [...], "layout": {...} }` object that
/// `Plotly.react` accepts.
pub trait PlotlyFigure {
    fn to_plotly(&self) -> Value;

    /// Figure as a JSON string for the JS bridge.
    fn to_json(&self) -> String {
        self.to_plotly().to_string()
    }
}

/// The cmocean "thermal" sequential palette, dark to light.
const THERMAL: [&str; 12] = [
    "rgb(3, 35, 51)",
    "rgb(13, 48, 100)",
    "rgb(53, 50, 155)",
    "rgb(93, 62, 153)",
    "rgb(126, 77, 143)",
    "rgb(158, 89, 135)",
    "rgb(193, 100, 121)",
    "rgb(225, 113, 97)",
    "rgb(246, 139, 69)",
    "rgb(251, 173, 60)",
    "rgb(246, 211, 70)",
    "rgb(231, 250, 90)",
];

/// Thermal palette as evenly spaced Plotly colorscale stops.
///
/// Plotly.js has no built-in "thermal" scale, so it is spelled out.
pub fn thermal_colorscale() -> Value {
    let last = (THERMAL.len() - 1) as f64;
    Value::Array(
        THERMAL
            .iter()
            .enumerate()
            .map(|(i, color)| serde_json::json!([i as f64 / last, color]))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermal_colorscale_spans_zero_to_one() {
        let scale = thermal_colorscale();
        let stops = scale.as_array().unwrap();
        assert_eq!(stops.len(), 12);
        assert_eq!(stops[0][0], 0.0);
        assert_eq!(stops[11][0], 1.0);
        assert_eq!(stops[0][1], "rgb(3, 35, 51)");
    }
}
