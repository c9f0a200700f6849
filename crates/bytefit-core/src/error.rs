use thiserror::Error;

pub type Result<T> = std::result::Result<T, BfError>;

#[derive(Debug, Error)]
pub enum BfError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("hex error: {0}")]
    Hex(String),
}
