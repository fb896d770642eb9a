// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A field name could neither be inferred from the entity nor was it supplied.
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(
        "could not slugify {entity} within {max_attempts} attempts, try increasing \
         max_attempts or passing in a unique desired text"
    )]
    RetryExhausted { entity: String, max_attempts: u32 },
    #[error("persistence error: {0}")]
    Persistence(String),
}
