pub mod assets;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod rules;
pub mod services;
pub mod sources;
pub mod utils;

pub use models::Movie;
pub use pipeline::CatalogPipeline;
pub use services::MovieService;
