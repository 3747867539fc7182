use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("programs not found on the search path: {}", programs.join(", "))]
    MissingPrograms { programs: Vec<String> },

    #[error("invalid job: {0}")]
    InvalidJob(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ExecError {
    fn from(e: std::io::Error) -> Self {
        ExecError::Io(e.to_string())
    }
}
