// Errors raised by the chart pipeline and its inputs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("malformed device time {device_time:?} at reading {index}")]
    MalformedInput { index: usize, device_time: String },

    #[error("invalid time range {start}..{end}: {reason}")]
    InvalidRange { start: i64, end: i64, reason: String },

    #[error("invalid pipeline configuration: {0}")]
    InvalidConfig(String),
}
