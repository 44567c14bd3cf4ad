use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown pet status: {0}")]
    UnknownStatus(String),
}
