use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid resource reference: {0}")]
    InvalidReference(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
