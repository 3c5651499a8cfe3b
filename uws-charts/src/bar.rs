//! Bar chart of station counts per selected region.

use crate::figure::PlotlyFigure;
use serde::Serialize;
use serde_json::{json, Value};
use uws_db::models::RegionCount;
use uws_db::Database;

pub const BAR_CHART_TITLE: &str = "Number of Stations in Region";
const BAR_CHART_SIZE: u32 = 500;

/// One bar per selected region, in region enumeration order.
///
/// Labels and heights come from the same [`RegionCount`], so a bar always
/// shows its own region's count.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChart {
    pub bars: Vec<RegionCount>,
}

impl BarChart {
    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.region.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<u32> {
        self.bars.iter().map(|b| b.count).collect()
    }
}

/// Count stations per region over the whole dataset, then keep the
/// selected regions.
///
/// Selection order and repeats do not matter. Names that are not regions
/// of the dataset get no bar.
pub fn region_bar_chart(db: &Database, selected: &[String]) -> anyhow::Result<BarChart> {
    let bars: Vec<RegionCount> = db
        .query_region_counts()?
        .into_iter()
        .filter(|count| selected.iter().any(|s| *s == count.region))
        .collect();

    let unknown: Vec<&str> = selected
        .iter()
        .map(String::as_str)
        .filter(|s| !bars.iter().any(|b| b.region == *s))
        .collect();
    if !unknown.is_empty() {
        log::warn!("[UWS] bar: ignoring unknown region(s): {}", unknown.join(", "));
    }

    Ok(BarChart { bars })
}

impl PlotlyFigure for BarChart {
    fn to_plotly(&self) -> Value {
        json!({
            "data": [{
                "type": "bar",
                "x": self.labels(),
                "y": self.counts(),
            }],
            "layout": {
                "xaxis": { "type": "category" },
                "width": BAR_CHART_SIZE,
                "height": BAR_CHART_SIZE,
                "title": { "text": BAR_CHART_TITLE },
            },
        })
    }
}
