use crate::error::ChartResult;
use crate::render::{Document, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still walks the document so tests can assert on what a real backend
/// would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_root_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, document: &Document) -> ChartResult<()> {
        let body = document.body();
        self.last_root_count = document.select_all(body, "svg").len();
        self.last_circle_count = document.select_all(body, "circle").len();
        self.last_text_count = document.select_all(body, "text").len();
        Ok(())
    }
}
