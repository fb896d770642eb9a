// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod store;
pub mod util;

pub use store::{AlwaysTakenStore, FailingStore, ProbingStore};
pub use util::IdentityNormalizer;
