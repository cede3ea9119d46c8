//! Movie loading service
//!
//! Joins a [`FeedFetcher`] to a [`CatalogPipeline`]: fetch the feed once,
//! run the pipeline over the body, and hand the movies back. Like the
//! pipeline itself, the default entry points never fail: a fetch error is
//! logged and yields an empty list.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::errors::AppResult;
use crate::models::Movie;
use crate::pipeline::{CatalogPipeline, ParseReport};
use crate::sources::FeedFetcher;
use crate::utils::UrlUtils;

#[derive(Clone)]
pub struct MovieService {
    fetcher: Arc<dyn FeedFetcher>,
    pipeline: CatalogPipeline,
    feed_url: String,
}

impl MovieService {
    pub fn new<S: Into<String>>(
        fetcher: Arc<dyn FeedFetcher>,
        pipeline: CatalogPipeline,
        feed_url: S,
    ) -> Self {
        Self {
            fetcher,
            pipeline,
            feed_url: feed_url.into(),
        }
    }

    /// Fetch the feed and return movies priced at or below `limit`
    pub async fn load_movies(&self, limit: f64) -> Vec<Movie> {
        match self.fetcher.fetch(&self.feed_url).await {
            Ok(body) => self.pipeline.parse(&body, limit),
            Err(e) => {
                warn!(
                    "Failed to fetch feed {} via {}: {}",
                    UrlUtils::obfuscate_credentials(&self.feed_url),
                    self.fetcher.fetcher_type(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Fetch and parse, reporting fetch and pipeline failures
    pub async fn try_load_movies(&self, limit: f64) -> AppResult<ParseReport> {
        let body = self.fetcher.fetch(&self.feed_url).await?;
        let report = self.pipeline.try_parse(&body, limit)?;
        info!(
            "Loaded {} movies from {}",
            report.movies.len(),
            UrlUtils::obfuscate_credentials(&self.feed_url)
        );
        Ok(report)
    }

    /// Load movies in the background and deliver them to `on_complete`
    ///
    /// The handler runs exactly once on the spawned task, with an empty list
    /// when the fetch or parse failed. Must be called within a tokio runtime.
    pub fn load_movies_with<F>(&self, limit: f64, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Vec<Movie>) + Send + 'static,
    {
        let service = self.clone();
        tokio::spawn(async move {
            let movies = service.load_movies(limit).await;
            on_complete(movies);
        })
    }
}
