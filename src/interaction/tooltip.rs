use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::core::number_format::format_number;
use crate::error::ChartResult;
use crate::render::{Document, NodeId};

pub const TOOLTIP_CLASS: &str = "tooltip";

/// Markup shown for one data row.
#[must_use]
pub fn tooltip_content(point: &DataPoint) -> String {
    format!(
        "{}<br>Healthcare (%): {}%<br>Poverty (%): {}",
        point.abbreviation,
        format_number(point.healthcare_lack_percent),
        format_number(point.poverty_percent)
    )
}

/// Public tooltip state for hosts and tests.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub html: Option<String>,
    /// Canvas-space point the overlay is anchored above.
    pub anchor: Option<(f64, f64)>,
    pub target: Option<NodeId>,
}

/// Hover overlay attached to the page body.
///
/// The overlay is placed north of its target: its bottom edge sits on the
/// anchor and it is centered horizontally on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    node: NodeId,
    state: TooltipState,
}

impl Tooltip {
    /// Appends the hidden overlay element under `parent`.
    pub fn attach(document: &mut Document, parent: NodeId) -> ChartResult<Self> {
        let node = document.append_element(parent, "div")?;
        document.add_class(node, TOOLTIP_CLASS)?;
        document.set_style(node, "position", "absolute")?;
        document.set_style(node, "top", "0px")?;
        document.set_style(node, "opacity", "0")?;
        document.set_style(node, "pointer-events", "none")?;
        document.set_style(node, "box-sizing", "border-box")?;

        Ok(Self {
            node,
            state: TooltipState::default(),
        })
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn show(
        &mut self,
        document: &mut Document,
        point: &DataPoint,
        anchor: (f64, f64),
        target: NodeId,
    ) -> ChartResult<()> {
        let html = tooltip_content(point);
        document.set_html(self.node, html.clone())?;
        document.set_style(self.node, "opacity", "1")?;
        document.set_style(self.node, "pointer-events", "all")?;
        document.set_style(self.node, "left", format!("{}px", format_number(anchor.0)))?;
        document.set_style(self.node, "top", format!("{}px", format_number(anchor.1)))?;
        document.set_style(self.node, "transform", "translate(-50%, -100%)")?;

        self.state = TooltipState {
            visible: true,
            html: Some(html),
            anchor: Some(anchor),
            target: Some(target),
        };
        Ok(())
    }

    /// Hides the overlay; the last content is kept like the element's markup.
    pub fn hide(&mut self, document: &mut Document) -> ChartResult<()> {
        document.set_style(self.node, "opacity", "0")?;
        document.set_style(self.node, "pointer-events", "none")?;
        self.state.visible = false;
        self.state.target = None;
        Ok(())
    }
}
