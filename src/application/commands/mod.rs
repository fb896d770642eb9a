pub mod slugs;

pub use slugs::SlugCommandService;
