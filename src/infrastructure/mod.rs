pub mod repositories;
pub mod util;
