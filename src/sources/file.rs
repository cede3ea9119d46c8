//! Local file feed fetcher, for saved payloads and offline runs

use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tracing::debug;

use super::traits::FeedFetcher;
use crate::errors::{SourceError, SourceResult};
use crate::utils::{DecompressionService, UrlUtils};

/// Reads feeds from `file://` URLs or plain filesystem paths
#[derive(Debug, Default, Clone)]
pub struct FileFeedFetcher;

impl FileFeedFetcher {
    pub fn new() -> Self {
        Self
    }

    fn resolve_path(location: &str) -> SourceResult<PathBuf> {
        if !location.starts_with("file:") {
            return Ok(PathBuf::from(location));
        }

        let parsed = UrlUtils::parse_feed_url(location)?;
        parsed.to_file_path().map_err(|_| SourceError::InvalidUrl {
            url: location.to_string(),
            message: "file URL does not name a local path".to_string(),
        })
    }
}

#[async_trait]
impl FeedFetcher for FileFeedFetcher {
    async fn fetch(&self, url: &str) -> SourceResult<String> {
        let path = Self::resolve_path(url)?;
        debug!("Reading feed from file: {}", path.display());

        let data = tokio::fs::read(&path)
            .await
            .map_err(|source| SourceError::File {
                path: path.display().to_string(),
                source,
            })?;

        let body = DecompressionService::decompress(Bytes::from(data))?;
        Ok(String::from_utf8(body)?)
    }

    fn fetcher_type(&self) -> &'static str {
        "file"
    }
}
