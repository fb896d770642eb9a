use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const DEFAULT_SOURCE_FIELD: &str = "name";
pub const DEFAULT_SLUG_FIELD: &str = "slug";

/// Lowercase ASCII alphanumeric tokens joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !value.split('-').all(is_slug_token) {
            return Err(DomainError::Validation(format!(
                "`{value}` is not a slug: expected lowercase alphanumeric tokens joined by single hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Trailing numeric segment, if the slug ends in `-<digits>`.
    pub fn counter(&self) -> Option<&str> {
        self.0
            .rsplit_once('-')
            .map(|(_, tail)| tail)
            .filter(|tail| is_counter(tail))
    }

    /// Candidate to probe after a collision.
    ///
    /// `foo-7` becomes `foo-8`; anything without a trailing numeric segment
    /// (`foo`, `foo-bar`) gets `-1` appended.
    pub fn next_candidate(&self) -> Self {
        let next = match self.0.rsplit_once('-') {
            Some((stem, tail)) if is_counter(tail) => {
                format!("{stem}-{}", increment_counter(tail))
            }
            _ => format!("{}-1", self.0),
        };
        Self(next)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_slug_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

fn is_counter(tail: &str) -> bool {
    !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit())
}

// Decimal increment on the digit string itself, so arbitrarily long counters
// never overflow. Leading zeros are dropped: `007` -> `8`.
fn increment_counter(digits: &str) -> String {
    let mut out: Vec<char> = digits.trim_start_matches('0').chars().collect();
    let mut carry = true;
    for digit in out.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, '1');
    }
    out.into_iter().collect()
}

/// Name of an entity field consulted by the slug generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Configuration(
                "field name cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn default_source() -> Self {
        Self(DEFAULT_SOURCE_FIELD.to_owned())
    }

    pub fn default_slug() -> Self {
        Self(DEFAULT_SLUG_FIELD.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
