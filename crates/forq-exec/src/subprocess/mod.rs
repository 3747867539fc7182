//! Subprocess backend for the pool.
//!
//! Turns [`forq_model::JobSpec`] values into live child processes via
//! `tokio::process::Command`: argv jobs are executed directly, shell jobs go
//! through `sh -c`.
mod spawner;

pub use spawner::SubprocessSpawner;

use forq_core::pool::{Pool, PoolConfig};
use forq_model::OutputMode;

/// Build a pool backed by the subprocess spawner.
pub fn subprocess_pool(config: PoolConfig, output: OutputMode) -> Pool<SubprocessSpawner> {
    Pool::new(SubprocessSpawner::new(output), config)
}
