use crate::constants::{bucket, object_key};
use crate::error::Result;
use crate::feeds::{self, EventFeed};
use crate::infra::http::{HttpTransport, PageTransport};
use crate::infra::storage::{BucketStore, S3BucketStore};
use crate::pipeline;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

/// Result of a complete harvest run.
#[derive(Debug, Serialize)]
pub struct RunOutcome {
    pub feed_name: String,
    pub entries: usize,
    pub published: bool,
    pub status: String,
}

/// Run the whole pipeline for one feed and publish the collection. An empty
/// result suppresses the publish; any error aborts before anything is
/// written, so a partial collection is never published.
#[instrument(skip(transport, feed, store), fields(feed_name = %feed.feed_name()))]
pub async fn run(
    transport: &dyn PageTransport,
    feed: &dyn EventFeed,
    store: &dyn BucketStore,
) -> Result<RunOutcome> {
    let entries = pipeline::get_entries(transport, feed).await?;

    if entries.is_empty() {
        let status = format!(
            "No entries loaded from {} so there is no JSON file to upload",
            feed.endpoint()
        );
        info!("{}", status);
        return Ok(RunOutcome {
            feed_name: feed.feed_name().to_string(),
            entries: 0,
            published: false,
            status,
        });
    }

    let key = object_key();
    let body = serde_json::to_vec(&entries)?;
    store.put_object(&key, body, "application/json").await?;

    let status = format!("Uploaded {} file with {} trade events", key, entries.len());
    info!("{}", status);
    Ok(RunOutcome {
        feed_name: feed.feed_name().to_string(),
        entries: entries.len(),
        published: true,
        status,
    })
}

/// Scheduler-facing entry point. Both arguments are opaque and ignored; the
/// return value is the human-readable status string the orchestrator logs.
pub async fn handler(_event: Value, _context: Value) -> Result<String> {
    let feed = feeds::from_env();
    let transport = HttpTransport::new();
    let store = S3BucketStore::new(bucket()).await;

    let outcome = run(&transport, feed.as_ref(), &store).await?;
    Ok(outcome.status)
}
