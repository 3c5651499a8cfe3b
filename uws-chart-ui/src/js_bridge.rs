//! Typed wrappers around Plotly.js interop via `js_sys::eval()`.
//!
//! Plotly.js itself is loaded by the page (see the dashboard's `App`). The
//! helper functions in `assets/js/plotly-chart.js` are evaluated as globals
//! (no ES modules) once Plotly is available and exposed via `window.*`.

use wasm_bindgen::JsValue;

// Embed the chart helpers at compile time
static PLOTLY_CHART_JS: &str = include_str!("../assets/js/plotly-chart.js");

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('UWS JS call failed:', e); }}",
        code
    );
    if let Err(err) = js_sys::eval(&wrapped) {
        log::warn!("[UWS] js_bridge: eval failed: {}", describe(&err));
    }
}

/// Initialize the chart helpers with a wait-for-Plotly polling loop.
///
/// The helpers are stored on `window`, evaluated at global scope via an
/// indirect `eval` once `Plotly` exists, then promoted to `window.*`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__uwsChartScripts && !window.__uwsChartsReady) {{ window.__uwsChartScripts = {}; }}",
        serde_json::to_string(PLOTLY_CHART_JS).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__uwsChartsInitStarted) return;
            window.__uwsChartsInitStarted = true;
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__uwsChartScripts);
                    delete window.__uwsChartScripts;
                    if (typeof renderPlotlyChart !== 'undefined') window.renderPlotlyChart = renderPlotlyChart;
                    if (typeof destroyPlotlyChart !== 'undefined') window.destroyPlotlyChart = destroyPlotlyChart;
                    window.__uwsChartsReady = true;
                    console.log('UWS charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Render a Plotly figure (`{data, layout}` JSON) into `container_id`.
///
/// Polls until Plotly, the helpers and the container exist. Each call takes
/// a per-container sequence number; a pending render that has been
/// overtaken by a newer call for the same container is dropped, so the
/// latest inputs always win.
pub fn render_figure(container_id: &str, figure_json: &str) {
    let id_literal = serde_json::to_string(container_id).unwrap_or_default();
    let figure_literal = serde_json::to_string(figure_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var id = {id_literal};
            var figure = {figure_literal};
            window.__uwsRenderSeq = window.__uwsRenderSeq || {{}};
            var seq = (window.__uwsRenderSeq[id] || 0) + 1;
            window.__uwsRenderSeq[id] = seq;
            var poll = setInterval(function() {{
                if (window.__uwsRenderSeq[id] !== seq) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__uwsChartsReady &&
                    typeof window.renderPlotlyChart !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(poll);
                    try {{
                        window.renderPlotlyChart(id, figure);
                    }} catch(e) {{ console.error('[UWS] renderPlotlyChart error:', e); }}
                }}
            }}, 50);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let exists = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .is_some();
    if !exists {
        return;
    }
    let id_literal = serde_json::to_string(container_id).unwrap_or_default();
    call_js(&format!(
        "if (window.destroyPlotlyChart) {{ window.destroyPlotlyChart({}); }}",
        id_literal
    ));
}
