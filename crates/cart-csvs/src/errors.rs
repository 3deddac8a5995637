use crate::validation::ValidationError;
use thiserror::Error;

pub type CartResult<T> = Result<T, CartError>;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation failed!")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

impl CartError {
    /// Structural errors behind a `ValidationFailed`, empty for every other variant.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            CartError::ValidationFailed { errors } => errors,
            _ => &[],
        }
    }
}
