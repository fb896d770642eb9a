// tests/support/builders.rs
use std::sync::Arc;

use unique_slug::application::commands::SlugCommandService;
use unique_slug::domain::slug::{Record, RecordStore, SlugDefaults, UniqueSlugService};
use unique_slug::infrastructure::util::DefaultTextNormalizer;

pub const COFFEE_SHOP: &str = "coffee_shop";

pub fn coffee_shop(name: &str) -> Record {
    Record::new(COFFEE_SHOP)
        .with_field("name", name)
        .with_unset_field("slug")
}

/// Owners have no `name` field; their display name is split in two.
pub fn cafe_owner(first_name: &str, last_name: &str) -> Record {
    Record::new("cafe_owner")
        .with_field("first_name", first_name)
        .with_field("last_name", last_name)
}

pub fn slug_service(store: Arc<dyn RecordStore>) -> UniqueSlugService {
    UniqueSlugService::new(store, Arc::new(DefaultTextNormalizer), SlugDefaults::default())
}

pub fn slug_commands(store: Arc<dyn RecordStore>) -> SlugCommandService {
    SlugCommandService::new(Arc::new(slug_service(store)))
}
