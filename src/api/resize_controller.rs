use tracing::{debug, warn};

use crate::core::{DatasetSource, Viewport};
use crate::interaction::ResizeEvent;
use crate::render::Document;

use super::{ChartRenderer, RenderOutcome};

/// Rebuilds the chart once at startup and again on every resize.
///
/// Nothing is debounced: each event triggers an immediate full rebuild.
pub struct ResizeController<S: DatasetSource> {
    renderer: ChartRenderer<S>,
    last_viewport: Option<Viewport>,
    render_count: usize,
    failed_render_count: usize,
}

impl<S: DatasetSource> ResizeController<S> {
    #[must_use]
    pub fn new(renderer: ChartRenderer<S>) -> Self {
        Self {
            renderer,
            last_viewport: None,
            render_count: 0,
            failed_render_count: 0,
        }
    }

    /// Initial render performed explicitly by the host entry point.
    pub fn start(&mut self, document: &mut Document) -> RenderOutcome {
        debug!("initial chart render");
        self.trigger(document)
    }

    pub fn on_resize(&mut self, document: &mut Document, event: ResizeEvent) -> RenderOutcome {
        debug!(
            width = event.viewport.width,
            height = event.viewport.height,
            "viewport resized"
        );
        self.last_viewport = Some(event.viewport);
        self.trigger(document)
    }

    /// Drains a resize event stream, rebuilding on each event. Returns the
    /// number of rebuilds performed; failed rebuilds are counted in
    /// `failed_render_count`.
    pub fn run<I>(&mut self, document: &mut Document, events: I) -> usize
    where
        I: IntoIterator<Item = ResizeEvent>,
    {
        let mut rebuilt = 0;
        for event in events {
            self.on_resize(document, event);
            rebuilt += 1;
        }
        rebuilt
    }

    #[must_use]
    pub fn renderer(&self) -> &ChartRenderer<S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut ChartRenderer<S> {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> ChartRenderer<S> {
        self.renderer
    }

    #[must_use]
    pub fn last_viewport(&self) -> Option<Viewport> {
        self.last_viewport
    }

    /// Renders triggered so far, the startup render included.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Renders that ended in `LoadFailed` or `CanvasUnavailable`.
    #[must_use]
    pub fn failed_render_count(&self) -> usize {
        self.failed_render_count
    }

    fn trigger(&mut self, document: &mut Document) -> RenderOutcome {
        self.render_count += 1;
        let outcome = self.renderer.render(document);
        if matches!(
            outcome,
            RenderOutcome::LoadFailed | RenderOutcome::CanvasUnavailable
        ) {
            self.failed_render_count += 1;
            warn!(
                render = self.render_count,
                failed = self.failed_render_count,
                ?outcome,
                "chart rebuild failed"
            );
        }
        outcome
    }
}
