//! Feed sources
//!
//! Fetchers hand the pipeline a complete response body. They never parse:
//! decoding, filtering and mapping belong to [`crate::pipeline`].

pub mod file;
pub mod http;
pub mod traits;

use std::sync::Arc;

use crate::config::FeedConfig;
use crate::errors::SourceResult;

pub use file::FileFeedFetcher;
pub use http::HttpFeedFetcher;
pub use traits::FeedFetcher;

/// Pick a fetcher for a feed location
///
/// `file:` URLs and anything without a URL scheme are read from disk;
/// everything else goes over HTTP.
pub fn fetcher_for(location: &str, config: &FeedConfig) -> SourceResult<Arc<dyn FeedFetcher>> {
    let is_remote = location.starts_with("http://") || location.starts_with("https://");
    if is_remote {
        Ok(Arc::new(HttpFeedFetcher::new(config)?))
    } else {
        Ok(Arc::new(FileFeedFetcher::new()))
    }
}
