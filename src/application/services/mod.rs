// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::SlugCommandService, ports::TextNormalizerPort},
    domain::slug::{RecordStore, SlugDefaults, UniqueSlugService},
};

/// Composition root wiring the store and normalizer into the slug services.
pub struct ApplicationServices {
    slugs: Arc<SlugCommandService>,
}

impl ApplicationServices {
    pub fn new(
        store: Arc<dyn RecordStore>,
        normalizer: Arc<TextNormalizerPort>,
        defaults: SlugDefaults,
    ) -> Self {
        let slug_service = Arc::new(UniqueSlugService::new(store, normalizer, defaults));
        let slugs = Arc::new(SlugCommandService::new(slug_service));

        Self { slugs }
    }

    pub fn slugs(&self) -> Arc<SlugCommandService> {
        Arc::clone(&self.slugs)
    }
}
