use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{DomainFloors, Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_CONTAINER_ID: &str = "scatter";
pub const DEFAULT_DATASET_PATH: &str = "assets/data/data.csv";

/// Scatter chart setup.
///
/// Serializable so hosts can keep it next to the dataset; every omitted
/// field falls back to the default chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterChartConfig {
    pub canvas: Viewport,
    pub margins: Margins,
    pub poverty_domain_floor: f64,
    pub healthcare_domain_floor: f64,
    pub marker_radius: f64,
    pub marker_fill: String,
    pub tick_count: usize,
    pub healthcare_axis_title: String,
    pub poverty_axis_title: String,
    /// Poverty title baseline sits this far below `plot height + top margin`.
    pub poverty_title_gap: f64,
    /// Assumed label height used to anchor tooltips above state labels.
    pub label_height: f64,
    pub dataset_path: PathBuf,
    pub container_id: String,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            canvas: Viewport::new(800, 700),
            margins: Margins::default(),
            poverty_domain_floor: 8.0,
            healthcare_domain_floor: 4.0,
            marker_radius: 15.0,
            marker_fill: "blue".to_owned(),
            tick_count: 10,
            healthcare_axis_title: "Lacks Healthcare(%)".to_owned(),
            poverty_axis_title: "In Poverty (%)".to_owned(),
            poverty_title_gap: 20.0,
            label_height: 12.0,
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
        }
    }
}

impl ScatterChartConfig {
    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: Viewport) -> Self {
        self.canvas = canvas;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    #[must_use]
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::from_canvas(self.canvas, self.margins)
    }

    #[must_use]
    pub fn domain_floors(&self) -> DomainFloors {
        DomainFloors {
            poverty: self.poverty_domain_floor,
            healthcare: self.healthcare_domain_floor,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot_area()?;

        for (name, value) in [
            ("poverty_domain_floor", self.poverty_domain_floor),
            ("healthcare_domain_floor", self.healthcare_domain_floor),
            ("poverty_title_gap", self.poverty_title_gap),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!("`{name}` must be finite")));
            }
        }
        for (name, value) in [
            ("marker_radius", self.marker_radius),
            ("label_height", self.label_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if self.container_id.is_empty() {
            return Err(ChartError::InvalidData(
                "container id must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
