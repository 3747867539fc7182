use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid job: {0}")]
    InvalidJob(String),

    #[error("unknown output mode: {0} (expected: discard|inherit)")]
    UnknownOutputMode(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
