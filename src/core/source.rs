use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Where a render cycle obtains the raw csv body.
///
/// Nothing is cached between calls; every render fetches again.
pub trait DatasetSource {
    /// Human-readable location used in diagnostics.
    fn describe(&self) -> String;

    fn fetch(&self) -> ChartResult<String>;
}

/// Reads the dataset from a file path on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileDatasetSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> ChartResult<String> {
        trace!(path = %self.path.display(), "reading dataset file");
        fs::read_to_string(&self.path).map_err(|err| ChartError::DatasetUnavailable {
            source_name: self.describe(),
            reason: err.to_string(),
        })
    }
}

/// Serves a fixed body or a fixed failure.
///
/// Useful for hosts that fetch the csv themselves and for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDatasetSource {
    name: String,
    body: Result<String, String>,
}

impl StaticDatasetSource {
    #[must_use]
    pub fn from_body(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Ok(body.into()),
        }
    }

    #[must_use]
    pub fn unreachable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Err(reason.into()),
        }
    }
}

impl DatasetSource for StaticDatasetSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> ChartResult<String> {
        self.body
            .clone()
            .map_err(|reason| ChartError::DatasetUnavailable {
                source_name: self.name.clone(),
                reason,
            })
    }
}

impl<S: DatasetSource + ?Sized> DatasetSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> ChartResult<String> {
        (**self).fetch()
    }
}
