mod error;
pub use error::ExecError;

mod preflight;
pub use preflight::check_programs;

pub mod subprocess;
