//! MovieService integration tests
//!
//! The fetcher seam is mocked with mockall for the service contract, and a
//! throwaway TCP listener stands in for a feed host to cover the real HTTP
//! fetcher end to end.

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use showtime::config::FeedConfig;
use showtime::errors::{AppError, PipelineError, SourceError, SourceResult};
use showtime::sources::{FeedFetcher, HttpFeedFetcher};
use showtime::{CatalogPipeline, Movie, MovieService};

mock! {
    pub Fetcher {}

    #[async_trait]
    impl FeedFetcher for Fetcher {
        async fn fetch(&self, url: &str) -> SourceResult<String>;
        fn fetcher_type(&self) -> &'static str;
    }
}

const FEED_URL: &str = "https://feeds.example.com/top-movies.json";
const FEED: &str = r#"{"results": [
    {"title": "Heat", "price": "$7.99", "imageUrl": "http://img/heat.jpg"},
    {"title": "Ran", "price": "$12.99"},
    {"title": "Nosferatu", "price": "Free"}
]}"#;

fn mock_returning(body: &'static str) -> MockFetcher {
    let mut fetcher = MockFetcher::new();
    fetcher
        .expect_fetch()
        .with(eq(FEED_URL))
        .times(1)
        .returning(move |_| Ok(body.to_string()));
    fetcher.expect_fetcher_type().return_const("mock");
    fetcher
}

fn mock_failing() -> MockFetcher {
    let mut fetcher = MockFetcher::new();
    fetcher.expect_fetch().times(1).returning(|_| {
        Err(SourceError::Http {
            status: 404,
            message: "Not Found".to_string(),
        })
    });
    fetcher.expect_fetcher_type().return_const("mock");
    fetcher
}

fn service_with(fetcher: MockFetcher) -> MovieService {
    MovieService::new(Arc::new(fetcher), CatalogPipeline::bundled(), FEED_URL)
}

#[tokio::test]
async fn test_load_movies_fetches_once_and_filters() {
    let service = service_with(mock_returning(FEED));

    let movies = service.load_movies(10.0).await;
    assert_eq!(
        movies,
        vec![
            Movie::new("Heat", 7.99).with_image_url("http://img/heat.jpg"),
            Movie::new("Nosferatu", 0.0),
        ]
    );
}

#[tokio::test]
async fn test_fetch_failure_degrades_to_empty() {
    let service = service_with(mock_failing());
    assert!(service.load_movies(10.0).await.is_empty());
}

#[tokio::test]
async fn test_try_load_reports_fetch_failure() {
    let service = service_with(mock_failing());
    let err = service.try_load_movies(10.0).await.unwrap_err();
    assert!(matches!(err, AppError::Source(SourceError::Http { status: 404, .. })));
}

#[tokio::test]
async fn test_try_load_reports_decode_failure() {
    let service = service_with(mock_returning("<html>maintenance</html>"));
    let err = service.try_load_movies(10.0).await.unwrap_err();
    assert!(matches!(err, AppError::Pipeline(PipelineError::Decode(_))));
}

#[tokio::test]
async fn test_callback_invoked_once_on_failure() {
    let service = service_with(mock_failing());
    let (tx, rx) = tokio::sync::oneshot::channel();

    service
        .load_movies_with(10.0, move |movies| {
            let _ = tx.send(movies);
        })
        .await
        .unwrap();

    assert!(rx.await.unwrap().is_empty());
}

#[test]
fn test_callback_from_blocking_context() {
    let service = service_with(mock_returning(FEED));
    let (tx, rx) = std::sync::mpsc::channel();

    tokio_test::block_on(async {
        service
            .load_movies_with(0.0, move |movies| {
                tx.send(movies).unwrap();
            })
            .await
            .unwrap();
    });

    assert_eq!(rx.recv().unwrap(), vec![Movie::new("Nosferatu", 0.0)]);
}

/// Serve a single canned HTTP response and return the URL to request
async fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = vec![0u8; 4096];
        let _ = socket.read(&mut request).await;

        let head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}/top-movies.json")
}

#[tokio::test]
async fn test_http_fetcher_end_to_end() {
    let url = serve_once("200 OK", FEED.as_bytes().to_vec()).await;
    let fetcher = HttpFeedFetcher::new(&FeedConfig::default()).unwrap();
    let service = MovieService::new(Arc::new(fetcher), CatalogPipeline::bundled(), url);

    let movies = service.load_movies(100.0).await;
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["Heat", "Ran", "Nosferatu"]);
}

#[cfg(feature = "compression-gzip")]
#[tokio::test]
async fn test_http_fetcher_gzip_body() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(FEED.as_bytes()).unwrap();
    let url = serve_once("200 OK", encoder.finish().unwrap()).await;

    let fetcher = HttpFeedFetcher::new(&FeedConfig::default()).unwrap();
    assert_eq!(fetcher.fetch(&url).await.unwrap(), FEED);
}

#[tokio::test]
async fn test_http_fetcher_error_status() {
    let url = serve_once("503 Service Unavailable", b"down".to_vec()).await;
    let fetcher = HttpFeedFetcher::new(&FeedConfig::default()).unwrap();

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert!(matches!(err, SourceError::Http { status: 503, .. }));
}
