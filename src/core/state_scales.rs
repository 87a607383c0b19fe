use tracing::{debug, warn};

use crate::core::{DataPoint, LinearScale, PlotArea};
use crate::error::ChartResult;

/// Fixed lower bounds of the two scatter axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainFloors {
    pub poverty: f64,
    pub healthcare: f64,
}

/// The x (poverty) and y (healthcare) scales for one render cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl StateScales {
    /// Builds `[floor, max]` domains from the loaded rows.
    ///
    /// The maximum skips NaN values. An axis with no finite value at all
    /// collapses to `[floor, floor]`, which maps every mark to mid-axis.
    pub fn from_points(
        points: &[DataPoint],
        plot: PlotArea,
        floors: DomainFloors,
    ) -> ChartResult<Self> {
        let poverty_max = finite_max(points.iter().map(|p| p.poverty_percent));
        let healthcare_max = finite_max(points.iter().map(|p| p.healthcare_lack_percent));

        let x_end = poverty_max.unwrap_or_else(|| {
            warn!(rows = points.len(), "no finite poverty values; x domain collapses");
            floors.poverty
        });
        let y_end = healthcare_max.unwrap_or_else(|| {
            warn!(rows = points.len(), "no finite healthcare values; y domain collapses");
            floors.healthcare
        });

        let x = LinearScale::new((floors.poverty, x_end), (0.0, plot.width))?;
        let y = LinearScale::new((floors.healthcare, y_end), (plot.height, 0.0))?;
        debug!(
            x_domain = ?x.domain(),
            y_domain = ?y.domain(),
            "built scatter scales"
        );
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn project(&self, point: &DataPoint) -> (f64, f64) {
        (
            self.x.map(point.poverty_percent),
            self.y.map(point.healthcare_lack_percent),
        )
    }
}

fn finite_max(values: impl Iterator<Item = f64>) -> Option<f64> {
    values
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            Some(current) if current >= value => Some(current),
            _ => Some(value),
        })
}

#[cfg(test)]
mod tests {
    use super::{DomainFloors, StateScales, finite_max};
    use crate::core::{DataPoint, PlotArea};

    const FLOORS: DomainFloors = DomainFloors {
        poverty: 8.0,
        healthcare: 4.0,
    };

    #[test]
    fn finite_max_skips_nan() {
        let max = finite_max([3.0, f64::NAN, 9.0, 1.0].into_iter());
        assert_eq!(max, Some(9.0));
        assert_eq!(finite_max([f64::NAN].into_iter()), None);
    }

    #[test]
    fn all_nan_axis_collapses_to_floor() {
        let points = vec![DataPoint::new("XX", f64::NAN, 12.0)];
        let plot = PlotArea {
            width: 710.0,
            height: 620.0,
        };
        let scales = StateScales::from_points(&points, plot, FLOORS).expect("scales");
        assert_eq!(scales.x.domain(), (8.0, 8.0));
        assert_eq!(scales.y.domain(), (4.0, 12.0));
    }
}
