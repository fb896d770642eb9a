// src/application/commands/slugs.rs
use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::slug::{Slug, SlugOptions, Sluggable, SluggableMut, UniqueSlugService},
};

pub struct SlugCommandService {
    slug_service: Arc<UniqueSlugService>,
}

impl SlugCommandService {
    pub fn new(slug_service: Arc<UniqueSlugService>) -> Self {
        Self { slug_service }
    }

    /// Returns a slug unused by any persisted record of the entity's kind.
    /// The caller persists it.
    pub async fn generate<E>(&self, entity: &E, options: &SlugOptions) -> ApplicationResult<Slug>
    where
        E: Sluggable + ?Sized,
    {
        Ok(self.slug_service.generate(entity, options).await?)
    }

    /// Fills the slug field of an entity about to be saved.
    ///
    /// An entity that already carries a slug is left untouched and `None` is
    /// returned; otherwise the generated slug is assigned and returned.
    pub async fn ensure_slug<E>(
        &self,
        entity: &mut E,
        options: &SlugOptions,
    ) -> ApplicationResult<Option<Slug>>
    where
        E: SluggableMut + ?Sized,
    {
        let slug_field = self.slug_service.slug_field(&*entity, options)?;
        if let Some(existing) = entity
            .field_text(slug_field.as_str())
            .filter(|value| !value.is_empty())
        {
            debug!(kind = entity.kind(), slug = existing, "slug already assigned");
            return Ok(None);
        }

        let slug = self.slug_service.generate(&*entity, options).await?;
        if !entity.assign_field(slug_field.as_str(), slug.to_string()) {
            return Err(ApplicationError::configuration(format!(
                "{entity} rejected assignment to `{slug_field}`"
            )));
        }

        info!(kind = entity.kind(), field = %slug_field, slug = %slug, "slug assigned");
        Ok(Some(slug))
    }
}
