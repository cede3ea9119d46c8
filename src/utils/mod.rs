//! Utility modules for the showtime crate
//!
//! Reusable helpers shared by the feed sources.

pub mod decompression;
pub mod url;

// Re-export commonly used types for convenience
pub use self::decompression::{CompressionFormat, DecompressionService};
pub use self::url::UrlUtils;
