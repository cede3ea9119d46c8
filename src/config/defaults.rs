/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Feed defaults
pub const DEFAULT_FEED_URL: &str = "https://itunes.apple.com/us/rss/topmovies/limit=50/json";
pub const DEFAULT_CONNECT_TIMEOUT: &str = "10s";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "30s";
pub const DEFAULT_USER_AGENT: &str = concat!("showtime/", env!("CARGO_PKG_VERSION"));

// Rule defaults
pub const BUNDLED_RULES_FILE: &str = "catalog.toml";
pub const DEFAULT_FREE_LABELS: &[&str] = &["Free"];

// Filter defaults
pub const DEFAULT_PRICE_LIMIT: f64 = 10.0;

// Environment
pub const ENV_PREFIX: &str = "SHOWTIME_";
pub const DEFAULT_CONFIG_FILE: &str = "showtime.toml";
