use async_trait::async_trait;
use sba_scraper::error::{Result, ScraperError};
use sba_scraper::feeds::SearchApiFeed;
use sba_scraper::handler::run;
use sba_scraper::infra::http::PageTransport;
use sba_scraper::infra::storage::BucketStore;
use serde_json::json;
use std::sync::Mutex;

struct MemoryBucketStore {
    puts: Mutex<Vec<(String, Vec<u8>, String)>>,
}

impl MemoryBucketStore {
    fn new() -> Self {
        Self {
            puts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BucketStore for MemoryBucketStore {
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        self.puts
            .lock()
            .unwrap()
            .push((key.to_string(), bytes, content_type.to_string()));
        Ok(())
    }
}

/// One page of items, then an empty page.
struct OnePageTransport;

#[async_trait]
impl PageTransport for OnePageTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let body = if url.ends_with("start=0") {
            json!({"items": [
                {"title": "Export University 101", "cost": "39.00"},
                {"title": "Trade Mission Briefing", "cost": "0.00"}
            ]})
        } else {
            json!({"items": []})
        };
        Ok(body.to_string().into_bytes())
    }
}

struct EmptyTransport;

#[async_trait]
impl PageTransport for EmptyTransport {
    async fn get(&self, _url: &str) -> Result<Vec<u8>> {
        Ok(br#"{"items": []}"#.to_vec())
    }
}

struct DownTransport;

#[async_trait]
impl PageTransport for DownTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        Err(ScraperError::Api {
            message: format!("request to {url} failed with status 503 Service Unavailable"),
        })
    }
}

#[tokio::test]
async fn test_run_publishes_collection() {
    let store = MemoryBucketStore::new();
    let outcome = run(&OnePageTransport, &SearchApiFeed::new(), &store)
        .await
        .unwrap();

    assert!(outcome.published);
    assert_eq!(outcome.entries, 2);
    assert_eq!(outcome.status, "Uploaded sba.json file with 2 trade events");

    let puts = store.puts.lock().unwrap();
    assert_eq!(puts.len(), 1);
    let (key, bytes, content_type) = &puts[0];
    assert_eq!(key, "sba.json");
    assert_eq!(content_type, "application/json");

    let published: Vec<serde_json::Value> = serde_json::from_slice(bytes).unwrap();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0]["cost"], "39.00");
}

#[tokio::test]
async fn test_run_suppresses_publish_when_empty() {
    let store = MemoryBucketStore::new();
    let outcome = run(&EmptyTransport, &SearchApiFeed::new(), &store)
        .await
        .unwrap();

    assert!(!outcome.published);
    assert_eq!(outcome.entries, 0);
    assert!(outcome.status.starts_with("No entries loaded from"));
    assert!(outcome
        .status
        .contains("https://www.sba.gov/api/content/search/events.json"));
    assert!(store.puts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_run_fails_closed_on_transport_error() {
    let store = MemoryBucketStore::new();
    let err = run(&DownTransport, &SearchApiFeed::new(), &store)
        .await
        .unwrap_err();

    assert!(matches!(err, ScraperError::Api { .. }));
    // Nothing was published for the failed run.
    assert!(store.puts.lock().unwrap().is_empty());
}
