// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("could not produce a unique slug for {entity} within {max_attempts} attempts")]
    RetryExhausted { entity: String, max_attempts: u32 },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether retrying with a larger budget or a more specific text could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RetryExhausted { .. })
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Configuration(msg) => Self::Configuration(msg),
            DomainError::RetryExhausted {
                entity,
                max_attempts,
            } => Self::RetryExhausted {
                entity,
                max_attempts,
            },
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}
