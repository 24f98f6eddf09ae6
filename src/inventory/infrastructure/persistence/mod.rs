pub mod fixtures;
pub mod repositories;
