//! Error types for the monitor core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("no glucose data available")]
    NoData,

    #[error("malformed reading: {0}")]
    MalformedReading(String),

    #[error("degenerate time delta between readings")]
    DegenerateTimeDelta,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
