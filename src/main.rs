use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showtime::{
    CatalogPipeline, MovieService,
    config::{Config, defaults::DEFAULT_CONFIG_FILE},
    models::Movie,
    sources::fetcher_for,
};

#[derive(Parser)]
#[command(name = "showtime")]
#[command(version)]
#[command(about = "Fetch a movie catalog feed and list titles within a price limit")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SHOWTIME_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Maximum price to include (defaults to filter.default_limit)
    #[arg(short, long, value_name = "PRICE", allow_negative_numbers = true)]
    limit: Option<f64>,

    /// Feed URL (overrides config file)
    #[arg(short = 'u', long, value_name = "URL")]
    feed_url: Option<String>,

    /// Read the feed from a local file instead of fetching it
    #[arg(short, long, value_name = "PATH", conflicts_with = "feed_url")]
    file: Option<PathBuf>,

    /// Rule file to use instead of the bundled rules
    #[arg(short, long, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Print movies as a JSON array
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

fn init_tracing(log_level: &str, json: bool) {
    let log_filter = format!("showtime={log_level}");
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log_filter.into());

    // Logs go to stderr so stdout stays parseable
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_movies(movies: &[Movie], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(movies)?);
        return Ok(());
    }

    for movie in movies {
        match &movie.image_url {
            Some(url) => println!("{:>8.2}  {}  <{}>", movie.price, movie.title, url),
            None => println!("{:>8.2}  {}", movie.price, movie.title),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_json);
    info!("Starting showtime v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;

    // Override config with CLI arguments
    if let Some(feed_url) = cli.feed_url {
        config.feed.url = feed_url;
    }
    if let Some(rules) = cli.rules {
        config.rules.path = Some(rules);
    }
    let limit = cli.limit.unwrap_or(config.filter.default_limit);

    let pipeline = match &config.rules.path {
        Some(path) => CatalogPipeline::from_rule_file(path),
        None => CatalogPipeline::bundled(),
    };

    let location = match &cli.file {
        Some(path) => path.display().to_string(),
        None => config.feed.url.clone(),
    };
    let fetcher = fetcher_for(&location, &config.feed)?;
    let service = MovieService::new(fetcher, pipeline, location);

    let movies = service.load_movies(limit).await;
    info!("{} movies at or below {:.2}", movies.len(), limit);

    print_movies(&movies, cli.json)
}
