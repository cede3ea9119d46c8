//! Catalog feed pipeline
//!
//! `decode` → `filter_by_limit` → `to_movies`, composed by
//! [`CatalogPipeline`]. Each stage is a pure function over the shared
//! [`crate::rules::RuleEngine`]; the pipeline runs synchronously and keeps no
//! state between calls.

pub mod decoder;
pub mod filter;
pub mod mapper;
pub mod orchestrator;

pub use decoder::decode;
pub use filter::filter_by_limit;
pub use mapper::{MappingReport, to_movies};
pub use orchestrator::{CatalogPipeline, ParseReport};
