use std::{
    collections::{HashMap, HashSet},
    path::Path,
    sync::RwLock,
};

use async_trait::async_trait;
use tracing::debug;

use super::error::{lock_poisoned, map_io, map_json};
use crate::domain::{
    errors::DomainResult,
    slug::{FieldName, Record, RecordStore, Slug, Sluggable},
};

type IndexKey = (String, String);

/// Process-local record store indexing field values per (kind, field).
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    index: RwLock<HashMap<IndexKey, HashSet<String>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> DomainResult<Self> {
        let store = Self::new();
        for record in records {
            store.insert_record(record)?;
        }
        Ok(store)
    }

    /// Loads a JSON array of records, e.g.
    /// `[{"kind": "coffee_shop", "fields": {"name": "Central Perk", "slug": "central-perk"}}]`.
    pub async fn from_json_file(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| map_io(path, &err))?;
        let records: Vec<Record> = serde_json::from_str(&raw).map_err(|err| map_json(path, &err))?;
        debug!(path = %path.display(), records = records.len(), "seeded record store");
        Self::from_records(&records)
    }

    /// Indexes every set field of `record`.
    pub fn insert_record(&self, record: &Record) -> DomainResult<()> {
        let mut index = self.index.write().map_err(|_| lock_poisoned())?;
        for (field, value) in record.fields() {
            if let Some(value) = value {
                index
                    .entry((record.kind().to_owned(), field.to_owned()))
                    .or_default()
                    .insert(value.to_owned());
            }
        }
        Ok(())
    }

    /// Returns `false` when the value was already present.
    pub fn insert(&self, kind: &str, field: &str, value: impl Into<String>) -> DomainResult<bool> {
        let mut index = self.index.write().map_err(|_| lock_poisoned())?;
        Ok(index
            .entry((kind.to_owned(), field.to_owned()))
            .or_default()
            .insert(value.into()))
    }

    pub fn remove(&self, kind: &str, field: &str, value: &str) -> DomainResult<bool> {
        let mut index = self.index.write().map_err(|_| lock_poisoned())?;
        let key = (kind.to_owned(), field.to_owned());
        Ok(index.get_mut(&key).is_some_and(|values| values.remove(value)))
    }

    pub fn len(&self, kind: &str, field: &str) -> DomainResult<usize> {
        let index = self.index.read().map_err(|_| lock_poisoned())?;
        let key = (kind.to_owned(), field.to_owned());
        Ok(index.get(&key).map_or(0, HashSet::len))
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn exists(&self, kind: &str, field: &FieldName, value: &Slug) -> DomainResult<bool> {
        let index = self.index.read().map_err(|_| lock_poisoned())?;
        let key = (kind.to_owned(), field.as_str().to_owned());
        Ok(index
            .get(&key)
            .is_some_and(|values| values.contains(value.as_str())))
    }
}
