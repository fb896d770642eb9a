pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Record, Sluggable, SluggableMut};
pub use repository::RecordStore;
pub use services::{SlugDefaults, SlugOptions, UniqueSlugService};
pub use value_objects::{FieldName, Slug};
