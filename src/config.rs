// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

use crate::domain::slug::{
    FieldName, SlugDefaults,
    services::DEFAULT_MAX_ATTEMPTS,
    value_objects::{DEFAULT_SLUG_FIELD, DEFAULT_SOURCE_FIELD},
};

#[derive(Clone, Debug)]
pub struct AppConfig {
    slug_defaults: SlugDefaults,
    record_kind: String,
    seed_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_record_kind() -> String {
    "record".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to the
    /// generator defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading keys through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let source_field = field_name(
            "SLUG_SOURCE_FIELD",
            lookup("SLUG_SOURCE_FIELD").unwrap_or_else(|| DEFAULT_SOURCE_FIELD.into()),
        )?;
        let slug_field = field_name(
            "SLUG_FIELD",
            lookup("SLUG_FIELD").unwrap_or_else(|| DEFAULT_SLUG_FIELD.into()),
        )?;

        let max_attempts = match lookup("SLUG_MAX_ATTEMPTS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "SLUG_MAX_ATTEMPTS must be a non-negative integer, got {raw:?}"
                ))
            })?,
            None => DEFAULT_MAX_ATTEMPTS,
        };

        let record_kind = lookup("SLUG_RECORD_KIND")
            .map(|kind| kind.trim().to_string())
            .unwrap_or_else(default_record_kind);
        if record_kind.is_empty() {
            return Err(ConfigError::Missing("SLUG_RECORD_KIND"));
        }

        let seed_file = lookup("SLUG_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            slug_defaults: SlugDefaults {
                source_field,
                slug_field,
                max_attempts,
            },
            record_kind,
            seed_file,
        })
    }

    pub fn slug_defaults(&self) -> &SlugDefaults {
        &self.slug_defaults
    }

    /// Kind assigned to records created from the command line.
    pub fn record_kind(&self) -> &str {
        &self.record_kind
    }

    /// JSON array of records pre-loaded into the in-memory store.
    pub fn seed_file(&self) -> Option<&PathBuf> {
        self.seed_file.as_ref()
    }
}

fn field_name(key: &'static str, value: String) -> Result<FieldName, ConfigError> {
    FieldName::new(value.trim()).map_err(|_| ConfigError::Invalid(format!("{key} cannot be empty")))
}
