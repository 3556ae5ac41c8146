//! Error types for dataset preparation.

/// Result type for dataset preparation operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error type for dataset preparation operations
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("{count} TIME_OCC value(s) could not be coerced to an hour (first offender at row {row}: {sample:?})")]
    MalformedTime {
        count: usize,
        row: usize,
        sample: String,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for DatasetError {
    fn from(s: String) -> Self {
        DatasetError::InternalError(s)
    }
}

impl From<&str> for DatasetError {
    fn from(s: &str) -> Self {
        DatasetError::InternalError(s.to_string())
    }
}
