// tests/support/mocks/util.rs
use unique_slug::application::ports::util::TextNormalizer;

/// Passes text through untouched.
#[derive(Clone)]
pub struct IdentityNormalizer;

impl TextNormalizer for IdentityNormalizer {
    fn normalize(&self, s: &str) -> String {
        s.to_string()
    }
}
