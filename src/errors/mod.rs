//! Centralized error handling for the showtime catalog pipeline
//!
//! Every stage of the pipeline has its own error type so callers that opt in
//! to diagnostics (see [`crate::pipeline::CatalogPipeline::try_parse`]) can
//! tell a broken feed apart from a broken rule definition.
//!
//! # Error Categories
//!
//! - **Decode Errors**: empty, malformed or unexpectedly shaped payloads
//! - **Rule Errors**: rule definitions that cannot be loaded or validated
//! - **Source Errors**: fetching the feed over HTTP or from disk
//! - **Pipeline Errors**: what `try_parse` reports at the pipeline boundary
//!
//! # Usage
//!
//! ```rust
//! use showtime::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Ok("success".to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Rule Engine Results
pub type RuleResult<T> = Result<T, RuleError>;

/// Convenience type alias for Pipeline Results
pub type PipelineResult<T> = Result<T, PipelineError>;
