use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid boolean literal: {0:?}")]
    InvalidBool(String),

    #[error("time out of range: {0}")]
    TimeRange(String),

    #[error("time formatting failed: {0}")]
    TimeFormat(String),
}

impl From<time::error::ComponentRange> for ModelError {
    fn from(e: time::error::ComponentRange) -> Self {
        ModelError::TimeRange(e.to_string())
    }
}

impl From<time::error::Format> for ModelError {
    fn from(e: time::error::Format) -> Self {
        ModelError::TimeFormat(e.to_string())
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
