use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub mod defaults;
pub mod duration_serde;

use crate::errors::{AppError, AppResult};
use defaults::*;
use duration_serde::duration;

/// Where the catalog feed comes from and how it is fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,
    #[serde(default = "default_connect_timeout", with = "duration")]
    pub connect_timeout: Duration,
    /// Total request timeout, including reading the body
    #[serde(default = "default_request_timeout", with = "duration")]
    pub request_timeout: Duration,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Rule source selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rule file to use instead of the bundled definition
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Price limit used when none is given on the command line
    #[serde(default = "default_price_limit")]
    pub default_limit: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_connect_timeout() -> Duration {
    humantime::parse_duration(DEFAULT_CONNECT_TIMEOUT).unwrap_or(Duration::from_secs(10))
}

fn default_request_timeout() -> Duration {
    humantime::parse_duration(DEFAULT_REQUEST_TIMEOUT).unwrap_or(Duration::from_secs(30))
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_price_limit() -> f64 {
    DEFAULT_PRICE_LIMIT
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_limit: default_price_limit(),
        }
    }
}

impl Config {
    /// Layer defaults, the TOML file (when present) and `SHOWTIME_*` variables
    ///
    /// Nested keys use a double underscore: `SHOWTIME_FEED__URL`.
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if Path::new(config_file).exists() {
            info!("Loading configuration from: {}", config_file);
        } else {
            info!(
                "Config file {} not found, using defaults and environment",
                config_file
            );
        }

        let config: Config = Self::figment(config_file)
            .extract()
            .with_context(|| format!("Failed to load configuration from {config_file}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment(config_file: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__").ignore(&["config_file"]))
    }

    pub fn validate(&self) -> AppResult<()> {
        url::Url::parse(&self.feed.url).map_err(|e| {
            AppError::configuration(format!("Invalid feed url {}: {}", self.feed.url, e))
        })?;

        if !self.filter.default_limit.is_finite() {
            return Err(AppError::configuration(format!(
                "filter.default_limit must be a finite number, got {}",
                self.filter.default_limit
            )));
        }
        if self.feed.request_timeout.is_zero() {
            return Err(AppError::configuration(
                "feed.request_timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}
