// tests/support/mocks/store.rs
use std::sync::Mutex;

use async_trait::async_trait;

use unique_slug::domain::errors::{DomainError, DomainResult};
use unique_slug::domain::slug::{FieldName, RecordStore, Slug};
use unique_slug::infrastructure::repositories::InMemoryRecordStore;

/// In-memory store that records every probed value.
#[derive(Default)]
pub struct ProbingStore {
    pub inner: InMemoryRecordStore,
    probes: Mutex<Vec<String>>,
}

impl ProbingStore {
    pub fn with_taken(kind: &str, field: &str, taken: &[&str]) -> Self {
        let store = Self::default();
        for value in taken {
            store.inner.insert(kind, field, *value).unwrap();
        }
        store
    }

    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for ProbingStore {
    async fn exists(&self, kind: &str, field: &FieldName, value: &Slug) -> DomainResult<bool> {
        self.probes.lock().unwrap().push(value.to_string());
        self.inner.exists(kind, field, value).await
    }
}

/// Every candidate collides.
pub struct AlwaysTakenStore;

#[async_trait]
impl RecordStore for AlwaysTakenStore {
    async fn exists(&self, _kind: &str, _field: &FieldName, _value: &Slug) -> DomainResult<bool> {
        Ok(true)
    }
}

pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn exists(&self, _kind: &str, _field: &FieldName, _value: &Slug) -> DomainResult<bool> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
