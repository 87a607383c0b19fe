use tracing::{debug, error, trace};

use crate::core::number_format::format_number;
use crate::core::{DataPoint, DatasetSource, PlotArea, StateScales, parse_dataset};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{TOOLTIP_CLASS, Tooltip, TooltipState};
use crate::render::{AxisOrient, AxisSpec, Document, EventKind, NodeId, draw_axis};

use super::ScatterChartConfig;

pub const STATE_CIRCLE_CLASS: &str = "stateCircle";
pub const STATE_TEXT_CLASS: &str = "stateText";
pub const AXIS_TITLE_CLASS: &str = "aText";

/// Result of one render cycle. Rendering itself never fails; every failure
/// is logged and reported here instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Axes, titles and one circle plus one label per row were drawn.
    Drawn { marks: usize },
    /// The dataset could not be fetched or parsed; the canvas stays empty.
    LoadFailed,
    /// A newer cycle started before this one finished; its data was dropped.
    Superseded,
    /// The container or configuration did not allow a canvas to be drawn.
    CanvasUnavailable,
}

/// Handle for a cycle whose canvas exists but whose data is still pending.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTicket {
    generation: u64,
    root: NodeId,
    group: NodeId,
    config: ScatterChartConfig,
    plot: PlotArea,
}

impl RenderTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }
}

/// One drawn row and the elements that represent it.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkBinding {
    pub point: DataPoint,
    pub circle: NodeId,
    pub label: NodeId,
    circle_anchor: (f64, f64),
    label_anchor: (f64, f64),
}

/// Everything the latest completed cycle put into the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub generation: u64,
    pub root: NodeId,
    pub group: NodeId,
    pub axes: [NodeId; 2],
    pub titles: [NodeId; 2],
    pub marks: Vec<MarkBinding>,
    tooltip: Tooltip,
}

impl ChartInstance {
    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        self.tooltip.state()
    }

    #[must_use]
    pub fn tooltip_node(&self) -> NodeId {
        self.tooltip.node()
    }
}

/// Owns the lifecycle of one scatter chart inside a host document.
///
/// Each cycle disposes the previous chart root, builds a new canvas, loads
/// and coerces the dataset, derives the scales and draws axes, marks,
/// titles and the hover tooltip. Cycles are tagged with a generation so a
/// cycle that finishes after a newer one started never draws.
pub struct ChartRenderer<S: DatasetSource> {
    config: ScatterChartConfig,
    source: S,
    generation: u64,
    current: Option<ChartInstance>,
}

impl<S: DatasetSource> ChartRenderer<S> {
    #[must_use]
    pub fn new(config: ScatterChartConfig, source: S) -> Self {
        Self {
            config,
            source,
            generation: 0,
            current: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ScatterChartConfig {
        &self.config
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generation of the most recently started cycle.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn current_chart(&self) -> Option<&ChartInstance> {
        self.current.as_ref()
    }

    /// Runs a full cycle against the configured source.
    pub fn render(&mut self, document: &mut Document) -> RenderOutcome {
        let ticket = match self.begin_render(document) {
            Ok(ticket) => ticket,
            Err(err) => {
                error!(error = %err, "failed to set up chart canvas");
                return RenderOutcome::CanvasUnavailable;
            }
        };
        let body = self.source.fetch();
        self.finish_render(document, ticket, body)
    }

    /// Disposes the previous chart and creates an empty canvas.
    ///
    /// Hosts that fetch asynchronously call this first and hand the body to
    /// `finish_render` once it arrives. Starting a cycle invalidates every
    /// ticket issued before it.
    pub fn begin_render(&mut self, document: &mut Document) -> ChartResult<RenderTicket> {
        self.generation += 1;
        let generation = self.generation;
        self.dispose(document)?;

        let config = self.config.clone();
        config.validate()?;
        let plot = config.plot_area()?;
        let container = document.select_by_id(&config.container_id).ok_or_else(|| {
            ChartError::InvalidData(format!("container `#{}` not found", config.container_id))
        })?;

        let root = document.append_element(container, "svg")?;
        document.set_attr(root, "width", config.canvas.width.to_string())?;
        document.set_attr(root, "height", config.canvas.height.to_string())?;

        let group = document.append_element(root, "g")?;
        document.set_attr(
            group,
            "transform",
            format!("translate({}, {})", config.margins.left, config.margins.top),
        )?;

        debug!(generation, source = %self.source.describe(), "chart canvas ready");
        Ok(RenderTicket {
            generation,
            root,
            group,
            config,
            plot,
        })
    }

    /// Draws the chart for `ticket` from the fetched csv body.
    pub fn finish_render(
        &mut self,
        document: &mut Document,
        ticket: RenderTicket,
        body: ChartResult<String>,
    ) -> RenderOutcome {
        if ticket.generation != self.generation || !document.contains(ticket.group) {
            debug!(
                ticket_generation = ticket.generation,
                latest_generation = self.generation,
                "discarding superseded render cycle"
            );
            return RenderOutcome::Superseded;
        }

        let points = match body.and_then(|raw| parse_dataset(&raw)) {
            Ok(points) => points,
            Err(err) => {
                error!(
                    generation = ticket.generation,
                    source = %self.source.describe(),
                    error = %err,
                    "failed to load dataset"
                );
                return RenderOutcome::LoadFailed;
            }
        };
        debug!(generation = ticket.generation, rows = points.len(), "dataset loaded");

        match draw_chart(document, &ticket, points) {
            Ok(instance) => {
                let marks = instance.marks.len();
                self.current = Some(instance);
                RenderOutcome::Drawn { marks }
            }
            Err(err) => {
                error!(generation = ticket.generation, error = %err, "failed to draw chart");
                RenderOutcome::CanvasUnavailable
            }
        }
    }

    /// Routes a pointer event to the tooltip.
    ///
    /// Returns `true` when `node` is a mark of the current chart with a
    /// listener for `kind`. Events for marks of disposed cycles are ignored.
    pub fn handle_pointer(
        &mut self,
        document: &mut Document,
        node: NodeId,
        kind: EventKind,
    ) -> ChartResult<bool> {
        let Some(instance) = self.current.as_mut() else {
            return Ok(false);
        };
        if !document.has_listener(node, kind) {
            return Ok(false);
        }
        let Some(mark) = instance
            .marks
            .iter()
            .find(|mark| mark.circle == node || mark.label == node)
        else {
            return Ok(false);
        };

        match kind {
            EventKind::MouseOver => {
                let anchor = if mark.circle == node {
                    mark.circle_anchor
                } else {
                    mark.label_anchor
                };
                trace!(abbreviation = %mark.point.abbreviation, "show tooltip");
                instance.tooltip.show(document, &mark.point, anchor, node)?;
            }
            EventKind::MouseOut => {
                trace!(abbreviation = %mark.point.abbreviation, "hide tooltip");
                instance.tooltip.hide(document)?;
            }
        }
        Ok(true)
    }

    fn dispose(&mut self, document: &mut Document) -> ChartResult<()> {
        // Canvases live in the chart container; overlays hang off the body.
        let body = document.body();
        let canvases = document
            .select_by_id(&self.config.container_id)
            .map(|container| document.select_all(container, "svg"))
            .unwrap_or_default();
        let stale: Vec<NodeId> = canvases
            .into_iter()
            .chain(document.select_all_by_class(body, TOOLTIP_CLASS))
            .collect();
        // Nested roots disappear together with their ancestor.
        for node in stale {
            if document.contains(node) {
                document.remove(node)?;
            }
        }
        if self.current.take().is_some() {
            trace!(generation = self.generation, "disposed previous chart");
        }
        Ok(())
    }
}

fn draw_chart(
    document: &mut Document,
    ticket: &RenderTicket,
    points: Vec<DataPoint>,
) -> ChartResult<ChartInstance> {
    let config = &ticket.config;
    let plot = ticket.plot;
    let group = ticket.group;
    let scales = StateScales::from_points(&points, plot, config.domain_floors())?;

    let bottom_axis = draw_axis(
        document,
        group,
        AxisSpec::new(AxisOrient::Bottom, scales.x, config.tick_count),
    )?;
    document.set_attr(
        bottom_axis,
        "transform",
        format!("translate(0, {})", format_number(plot.height)),
    )?;
    let left_axis = draw_axis(
        document,
        group,
        AxisSpec::new(AxisOrient::Left, scales.y, config.tick_count),
    )?;

    let offset_x = f64::from(config.margins.left);
    let offset_y = f64::from(config.margins.top);
    let mut bound = Vec::with_capacity(points.len());
    for point in &points {
        let (x, y) = scales.project(point);
        let circle = document.append_element(group, "circle")?;
        document.set_attr(circle, "cx", format_number(x))?;
        document.set_attr(circle, "cy", format_number(y))?;
        document.set_attr(circle, "r", format_number(config.marker_radius))?;
        document.set_attr(circle, "fill", config.marker_fill.clone())?;
        document.add_class(circle, STATE_CIRCLE_CLASS)?;
        bound.push((circle, x, y));
    }

    let mut marks = Vec::with_capacity(points.len());
    for (point, (circle, x, y)) in points.into_iter().zip(bound) {
        let label = document.append_element(group, "text")?;
        document.set_attr(label, "x", format_number(x))?;
        document.set_attr(label, "y", format_number(y))?;
        document.add_class(label, STATE_TEXT_CLASS)?;
        document.set_text(label, point.abbreviation.clone())?;

        marks.push(MarkBinding {
            point,
            circle,
            label,
            circle_anchor: (x + offset_x, y - config.marker_radius + offset_y),
            label_anchor: (x + offset_x, y - config.label_height + offset_y),
        });
    }

    let healthcare_title = document.append_element(group, "text")?;
    document.set_attr(healthcare_title, "transform", "rotate(-90)")?;
    document.set_attr(
        healthcare_title,
        "y",
        format_number(-f64::from(config.margins.left)),
    )?;
    document.set_attr(healthcare_title, "x", format_number(-plot.height / 2.0))?;
    document.set_attr(healthcare_title, "dy", "1em")?;
    document.add_class(healthcare_title, AXIS_TITLE_CLASS)?;
    document.set_attr(healthcare_title, "data-axis-name", "healthcare")?;
    document.set_text(healthcare_title, config.healthcare_axis_title.clone())?;

    let poverty_title = document.append_element(group, "text")?;
    document.set_attr(
        poverty_title,
        "transform",
        format!(
            "translate({}, {})",
            format_number(plot.width / 2.0),
            format_number(plot.height + offset_y + config.poverty_title_gap)
        ),
    )?;
    document.set_attr(poverty_title, "data-axis-name", "poverty")?;
    document.add_class(poverty_title, AXIS_TITLE_CLASS)?;
    document.set_text(poverty_title, config.poverty_axis_title.clone())?;

    let body = document.body();
    let tooltip = Tooltip::attach(document, body)?;
    for mark in &marks {
        for node in [mark.label, mark.circle] {
            document.add_listener(node, EventKind::MouseOver)?;
            document.add_listener(node, EventKind::MouseOut)?;
        }
    }

    debug!(
        generation = ticket.generation,
        marks = marks.len(),
        "chart drawn"
    );
    Ok(ChartInstance {
        generation: ticket.generation,
        root: ticket.root,
        group,
        axes: [bottom_axis, left_axis],
        titles: [healthcare_title, poverty_title],
        marks,
        tooltip,
    })
}
