mod domain;
pub use domain::{Env, KeyValue, OutputMode};

mod error;
pub use error::ModelError;

mod job;
pub use job::{JobCommand, JobSpec};

mod outcome;
pub use outcome::JobOutcome;
