pub mod error;
pub mod partition;
pub mod pool;
pub mod queue;
pub mod spawn;

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::partition::split;
    pub use crate::pool::{Pool, PoolConfig};
    pub use crate::queue::JobQueue;
    pub use crate::spawn::{ActiveSlot, SpawnContext, SpawnError, Spawner};
}
