use crate::domain::slug::value_objects::FieldName;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// Values used when a call leaves an option unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugDefaults {
    pub source_field: FieldName,
    pub slug_field: FieldName,
    pub max_attempts: u32,
}

impl Default for SlugDefaults {
    fn default() -> Self {
        Self {
            source_field: FieldName::default_source(),
            slug_field: FieldName::default_slug(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Per-call overrides for slug generation.
#[derive(Debug, Clone, Default)]
pub struct SlugOptions {
    desired_text: Option<String>,
    source_field: Option<String>,
    slug_field: Option<String>,
    max_attempts: Option<u32>,
}

impl SlugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify this text instead of reading the source field.
    pub fn with_desired_text(mut self, text: impl Into<String>) -> Self {
        self.desired_text = Some(text.into());
        self
    }

    pub fn with_source_field(mut self, field: impl Into<String>) -> Self {
        self.source_field = Some(field.into());
        self
    }

    pub fn with_slug_field(mut self, field: impl Into<String>) -> Self {
        self.slug_field = Some(field.into());
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn desired_text(&self) -> Option<&str> {
        self.desired_text.as_deref()
    }

    pub fn source_field(&self) -> Option<&str> {
        self.source_field.as_deref()
    }

    pub fn slug_field(&self) -> Option<&str> {
        self.slug_field.as_deref()
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }
}
