pub mod dataset;
pub mod number_format;
pub mod scale;
pub mod source;
pub mod state_scales;
pub mod types;

pub use dataset::{DataPoint, coerce_numeric, parse_dataset};
pub use scale::LinearScale;
pub use source::{DatasetSource, FileDatasetSource, StaticDatasetSource};
pub use state_scales::{DomainFloors, StateScales};
pub use types::{Margins, PlotArea, Viewport};
