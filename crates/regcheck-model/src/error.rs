use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown field role: {0}")]
    UnknownFieldRole(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
