//! Feed fetcher trait definition
//!
//! A fetcher is the only I/O collaborator of the pipeline: it turns a feed
//! location into the full response body as text, once per call.

use async_trait::async_trait;

use crate::errors::SourceResult;

#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch the complete feed body as UTF-8 text
    async fn fetch(&self, url: &str) -> SourceResult<String>;

    /// Short name used in log lines
    fn fetcher_type(&self) -> &'static str;
}
