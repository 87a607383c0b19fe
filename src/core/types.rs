use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20, 40, 60, 50)
    }
}

/// Plot-local drawing region, i.e. the canvas minus its margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_canvas(canvas: Viewport, margins: Margins) -> ChartResult<Self> {
        let horizontal = margins.left.saturating_add(margins.right);
        let vertical = margins.top.saturating_add(margins.bottom);
        if !canvas.is_valid() || canvas.width <= horizontal || canvas.height <= vertical {
            return Err(ChartError::InvalidViewport {
                width: canvas.width,
                height: canvas.height,
            });
        }

        Ok(Self {
            width: f64::from(canvas.width - horizontal),
            height: f64::from(canvas.height - vertical),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Margins, PlotArea, Viewport};

    #[test]
    fn default_canvas_yields_expected_plot_area() {
        let area = PlotArea::from_canvas(Viewport::new(800, 700), Margins::default())
            .expect("valid plot area");
        assert_eq!(area.width, 710.0);
        assert_eq!(area.height, 620.0);
    }

    #[test]
    fn margins_that_consume_the_canvas_are_rejected() {
        let result = PlotArea::from_canvas(Viewport::new(90, 700), Margins::default());
        assert!(result.is_err());
    }
}
