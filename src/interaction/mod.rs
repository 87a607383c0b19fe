mod tooltip;

pub use tooltip::{TOOLTIP_CLASS, Tooltip, TooltipState, tooltip_content};

use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Host viewport change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub viewport: Viewport,
}

impl ResizeEvent {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
        }
    }
}
