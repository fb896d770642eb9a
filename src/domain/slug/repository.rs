use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{FieldName, Slug};

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Whether a persisted record of `kind` already holds `value` in `field`.
    async fn exists(&self, kind: &str, field: &FieldName, value: &Slug) -> DomainResult<bool>;
}
