use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset `{source_name}` is unavailable: {reason}")]
    DatasetUnavailable { source_name: String, reason: String },

    #[error("dataset is not valid csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid chart config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unknown node id {0}")]
    UnknownNode(usize),
}
