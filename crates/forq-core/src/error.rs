use thiserror::Error;

use crate::spawn::SpawnError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("split factor must be at least 1, got {0}")]
    InvalidFactor(usize),

    #[error("spawn error: {0}")]
    Spawn(#[from] SpawnError),

    #[error("wait failed: {0}")]
    Wait(String),

    #[error("join failed: {0}")]
    Join(String),
}
