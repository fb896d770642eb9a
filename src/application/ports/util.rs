// src/application/ports/util.rs

/// Turns arbitrary text into a lowercase, hyphen-joined, ASCII-safe token.
/// Must be deterministic; an empty result means nothing slug-worthy was left.
pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, input: &str) -> String;
}
