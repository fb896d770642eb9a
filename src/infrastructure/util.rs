use crate::application::ports::util::TextNormalizer;
use slug::slugify;

/// Transliterates to ASCII, lowercases and joins words with single hyphens.
#[derive(Default, Clone)]
pub struct DefaultTextNormalizer;

impl TextNormalizer for DefaultTextNormalizer {
    fn normalize(&self, input: &str) -> String {
        slugify(input)
    }
}
