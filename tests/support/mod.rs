#![allow(dead_code)]

use scatter_rs::api::{ChartRenderer, ScatterChartConfig};
use scatter_rs::core::StaticDatasetSource;
use scatter_rs::render::{Document, NodeId};

pub const TWO_STATES_CSV: &str = "abbr,poverty,healthcare\nA,10,5\nB,20,10\n";

pub fn page() -> Document {
    Document::with_container("scatter")
}

pub fn chart_from_csv(body: &str) -> ChartRenderer<StaticDatasetSource> {
    ChartRenderer::new(
        ScatterChartConfig::default(),
        StaticDatasetSource::from_body("inline.csv", body),
    )
}

pub fn unreachable_chart() -> ChartRenderer<StaticDatasetSource> {
    ChartRenderer::new(
        ScatterChartConfig::default(),
        StaticDatasetSource::unreachable("../assets/data/data.csv", "connection refused"),
    )
}

pub fn attr_f64(document: &Document, node: NodeId, name: &str) -> f64 {
    document
        .element(node)
        .and_then(|element| element.attr(name))
        .expect("attribute present")
        .parse()
        .expect("numeric attribute")
}
