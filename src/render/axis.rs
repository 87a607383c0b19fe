use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::number_format::format_number;
use crate::error::ChartResult;

use super::{Document, NodeId};

pub const AXIS_CLASS: &str = "axis";
pub const TICK_CLASS: &str = "tick";
pub const DOMAIN_CLASS: &str = "domain";

/// Offset that centers one-pixel strokes on the pixel grid.
const CRISP_OFFSET: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    pub orient: AxisOrient,
    pub scale: LinearScale,
    pub tick_count: usize,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl AxisSpec {
    #[must_use]
    pub fn new(orient: AxisOrient, scale: LinearScale, tick_count: usize) -> Self {
        Self {
            orient,
            scale,
            tick_count,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
        }
    }
}

/// Appends one axis group under `parent` and returns it.
///
/// The group holds a `path.domain` spanning the scale range followed by
/// one `g.tick` (line and label) per tick value.
pub fn draw_axis(document: &mut Document, parent: NodeId, spec: AxisSpec) -> ChartResult<NodeId> {
    let group = document.append_element(parent, "g")?;
    document.add_class(group, AXIS_CLASS)?;
    document.add_class(
        group,
        match spec.orient {
            AxisOrient::Bottom => "axis-bottom",
            AxisOrient::Left => "axis-left",
        },
    )?;
    document.set_attr(group, "fill", "none")?;
    document.set_attr(group, "font-size", "10")?;
    document.set_attr(group, "font-family", "sans-serif")?;
    document.set_attr(
        group,
        "text-anchor",
        match spec.orient {
            AxisOrient::Bottom => "middle",
            AxisOrient::Left => "end",
        },
    )?;

    let (range_start, range_end) = spec.scale.range();
    let r0 = format_number(range_start + CRISP_OFFSET);
    let r1 = format_number(range_end + CRISP_OFFSET);
    let outer = format_number(spec.tick_size_outer);
    let domain_path = match spec.orient {
        AxisOrient::Bottom => format!("M{r0},{outer}V{CRISP_OFFSET}H{r1}V{outer}"),
        AxisOrient::Left => format!("M-{outer},{r0}H{CRISP_OFFSET}V{r1}H-{outer}"),
    };
    let domain = document.append_element(group, "path")?;
    document.add_class(domain, DOMAIN_CLASS)?;
    document.set_attr(domain, "stroke", "currentColor")?;
    document.set_attr(domain, "d", domain_path)?;

    let spacing = spec.tick_size_inner.max(0.0) + spec.tick_padding;
    for (value, label) in spec.scale.tick_format(spec.tick_count) {
        let position = format_number(spec.scale.map(value) + CRISP_OFFSET);
        let tick = document.append_element(group, "g")?;
        document.add_class(tick, TICK_CLASS)?;
        document.set_attr(tick, "opacity", "1")?;

        let line = document.append_element(tick, "line")?;
        document.set_attr(line, "stroke", "currentColor")?;
        let text = document.append_element(tick, "text")?;
        document.set_attr(text, "fill", "currentColor")?;
        document.set_text(text, label)?;

        match spec.orient {
            AxisOrient::Bottom => {
                document.set_attr(tick, "transform", format!("translate({position},0)"))?;
                document.set_attr(line, "y2", format_number(spec.tick_size_inner))?;
                document.set_attr(text, "y", format_number(spacing))?;
                document.set_attr(text, "dy", "0.71em")?;
            }
            AxisOrient::Left => {
                document.set_attr(tick, "transform", format!("translate(0,{position})"))?;
                document.set_attr(line, "x2", format_number(-spec.tick_size_inner))?;
                document.set_attr(text, "x", format_number(-spacing))?;
                document.set_attr(text, "dy", "0.32em")?;
            }
        }
    }

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::{AxisOrient, AxisSpec, TICK_CLASS, draw_axis};
    use crate::core::LinearScale;
    use crate::render::Document;

    #[test]
    fn bottom_axis_places_ticks_along_range() {
        let mut document = Document::new();
        let body = document.body();
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("scale");
        let axis = draw_axis(&mut document, body, AxisSpec::new(AxisOrient::Bottom, scale, 2))
            .expect("axis");

        let ticks = document.select_all_by_class(axis, TICK_CLASS);
        assert_eq!(ticks.len(), 3);
        let last = document.element(ticks[2]).expect("tick");
        assert_eq!(last.attr("transform"), Some("translate(100.5,0)"));

        let path = document.select_all(axis, "path")[0];
        assert_eq!(
            document.element(path).and_then(|e| e.attr("d")),
            Some("M0.5,6V0.5H100.5V6")
        );
    }

    #[test]
    fn left_axis_anchors_labels_at_end() {
        let mut document = Document::new();
        let body = document.body();
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("scale");
        let axis = draw_axis(&mut document, body, AxisSpec::new(AxisOrient::Left, scale, 2))
            .expect("axis");

        let element = document.element(axis).expect("axis element");
        assert_eq!(element.attr("text-anchor"), Some("end"));
        let path = document.select_all(axis, "path")[0];
        assert_eq!(
            document.element(path).and_then(|e| e.attr("d")),
            Some("M-6,100.5H0.5V0.5H-6")
        );
        let labels: Vec<_> = document
            .select_all(axis, "text")
            .into_iter()
            .filter_map(|id| document.element(id).and_then(|e| e.text.clone()))
            .collect();
        assert_eq!(labels, vec!["0", "5", "10"]);
    }
}
