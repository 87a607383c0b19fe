mod chart_config;
mod chart_renderer;
mod resize_controller;

pub use chart_config::{DEFAULT_CONTAINER_ID, DEFAULT_DATASET_PATH, ScatterChartConfig};
pub use chart_renderer::{
    AXIS_TITLE_CLASS, ChartInstance, ChartRenderer, MarkBinding, RenderOutcome, RenderTicket,
    STATE_CIRCLE_CLASS, STATE_TEXT_CLASS,
};
pub use resize_controller::ResizeController;
