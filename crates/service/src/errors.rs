use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("no pet ids left to assign")]
    IdSpaceExhausted,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
