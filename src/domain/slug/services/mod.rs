// src/domain/slug/services/mod.rs
mod options;

use std::sync::Arc;

use tracing::debug;

use crate::application::ports::util::TextNormalizer;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::entity::Sluggable;
use crate::domain::slug::repository::RecordStore;
use crate::domain::slug::value_objects::{FieldName, Slug};

pub use options::{DEFAULT_MAX_ATTEMPTS, SlugDefaults, SlugOptions};

/// Domain service responsible for producing slugs that no persisted record
/// of the same kind already uses.
///
/// Uniqueness holds only for the store state observed at each check; two
/// concurrent callers can still settle on the same candidate, so the store
/// must enforce uniqueness on write as well.
pub struct UniqueSlugService {
    store: Arc<dyn RecordStore>,
    normalizer: Arc<dyn TextNormalizer>,
    defaults: SlugDefaults,
}

impl UniqueSlugService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        normalizer: Arc<dyn TextNormalizer>,
        defaults: SlugDefaults,
    ) -> Self {
        Self {
            store,
            normalizer,
            defaults,
        }
    }

    pub fn defaults(&self) -> &SlugDefaults {
        &self.defaults
    }

    /// Generates a slug for `entity`, probing the store and bumping the
    /// numeric suffix on every collision until a free value turns up or the
    /// attempt budget is spent. Never writes to the store or the entity.
    pub async fn generate<E>(&self, entity: &E, options: &SlugOptions) -> DomainResult<Slug>
    where
        E: Sluggable + ?Sized,
    {
        let (mut candidate, slug_field) = self.initial_candidate(entity, options)?;
        let max_attempts = options.max_attempts().unwrap_or(self.defaults.max_attempts);
        let kind = entity.kind();
        let mut attempts = 0u32;

        while self.store.exists(kind, &slug_field, &candidate).await? {
            if attempts >= max_attempts {
                return Err(DomainError::RetryExhausted {
                    entity: entity.to_string(),
                    max_attempts,
                });
            }
            let next = candidate.next_candidate();
            debug!(
                kind,
                field = %slug_field,
                taken = %candidate,
                next = %next,
                attempt = attempts + 1,
                "slug collision"
            );
            candidate = next;
            attempts += 1;
        }

        Ok(candidate)
    }

    /// Resolves the field whose uniqueness is checked, which must exist on
    /// the entity whether it was supplied or defaulted.
    pub fn slug_field<E>(&self, entity: &E, options: &SlugOptions) -> DomainResult<FieldName>
    where
        E: Sluggable + ?Sized,
    {
        let field = match options.slug_field() {
            Some(name) => FieldName::new(name)?,
            None => self.defaults.slug_field.clone(),
        };
        if !entity.has_field(field.as_str()) {
            return Err(DomainError::Configuration(format!(
                "{entity} has no field `{field}`, slug_field is required"
            )));
        }
        Ok(field)
    }

    /// Text the slug is derived from: the desired text when given, the
    /// source field otherwise.
    pub fn source_text<'a, E>(&self, entity: &'a E, options: &'a SlugOptions) -> DomainResult<&'a str>
    where
        E: Sluggable + ?Sized,
    {
        if let Some(text) = options.desired_text() {
            return Ok(text);
        }

        let field = match options.source_field() {
            Some(name) => FieldName::new(name)?,
            None => self.defaults.source_field.clone(),
        };
        if !entity.has_field(field.as_str()) {
            return Err(DomainError::Configuration(format!(
                "{entity} has no field `{field}`, source_field is required"
            )));
        }
        Ok(entity.field_text(field.as_str()).unwrap_or_default())
    }

    fn initial_candidate<E>(&self, entity: &E, options: &SlugOptions) -> DomainResult<(Slug, FieldName)>
    where
        E: Sluggable + ?Sized,
    {
        let text = self.source_text(entity, options)?;
        let slug_field = self.slug_field(entity, options)?;

        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            return Err(DomainError::Validation(format!(
                "cannot derive a slug for {entity} from {text:?}"
            )));
        }

        Ok((Slug::new(normalized)?, slug_field))
    }
}
