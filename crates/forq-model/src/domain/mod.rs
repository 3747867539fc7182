mod env;
mod kv;
mod output;

pub use env::Env;
pub use kv::KeyValue;
pub use output::OutputMode;
