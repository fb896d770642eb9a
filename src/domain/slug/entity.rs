use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

use super::value_objects::DEFAULT_SOURCE_FIELD;

/// Read access to the fields a slug is derived from and checked against.
///
/// `Display` is used to identify the entity in error messages.
pub trait Sluggable: fmt::Display {
    /// Entity type; store lookups are scoped to it.
    fn kind(&self) -> &str;

    /// Whether the entity declares `field`, regardless of its current value.
    fn has_field(&self, field: &str) -> bool;

    /// Current text of `field`; `None` when it is missing or unset.
    fn field_text(&self, field: &str) -> Option<&str>;
}

pub trait SluggableMut: Sluggable {
    /// Returns `false` when the entity has no such field.
    fn assign_field(&mut self, field: &str, value: String) -> bool;
}

/// A schemaless entity: a kind plus named, optionally-set text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    kind: String,
    #[serde(default)]
    fields: BTreeMap<String, Option<String>>,
}

impl Record {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), Some(value.into()));
        self
    }

    /// Declares `field` without giving it a value.
    pub fn with_unset_field(mut self, field: impl Into<String>) -> Self {
        self.fields.insert(field.into(), None);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field_text(DEFAULT_SOURCE_FIELD) {
            Some(name) => write!(f, "{} \"{name}\"", self.kind),
            None => f.write_str(&self.kind),
        }
    }
}

impl Sluggable for Record {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    fn field_text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|value| value.as_deref())
    }
}

impl SluggableMut for Record {
    fn assign_field(&mut self, field: &str, value: String) -> bool {
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }
}
