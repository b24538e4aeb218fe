pub mod filter;
pub mod normalize;
pub mod paginator;

use crate::error::Result;
use crate::feeds::EventFeed;
use crate::infra::http::PageTransport;
use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::{info, instrument};

/// Fetch, normalize, and filter all entries for one feed. Entries come back
/// as JSON values ready for publishing: canonical records for feeds with a
/// field map, key-renamed raw items for the early search API feed.
pub async fn get_entries(
    transport: &dyn PageTransport,
    feed: &dyn EventFeed,
) -> Result<Vec<Value>> {
    collect_entries(transport, feed, || Local::now().date_naive()).await
}

/// Same as [`get_entries`] with the date source injected. The validity
/// filter asks for the date per record, so a run spanning midnight uses the
/// date at evaluation time rather than at process start.
#[instrument(skip(transport, feed, today), fields(feed_name = %feed.feed_name()))]
pub async fn collect_entries(
    transport: &dyn PageTransport,
    feed: &dyn EventFeed,
    today: impl Fn() -> NaiveDate,
) -> Result<Vec<Value>> {
    let items = paginator::fetch_all(transport, feed).await?;
    info!("Found a total of {} events", items.len());

    let entries = match feed.field_map() {
        Some(fields) => {
            let mut records = Vec::with_capacity(items.len());
            for item in &items {
                records.push(normalize::normalize(item, fields)?);
            }
            let normalized = records.len();
            let kept = records
                .into_iter()
                .filter(|record| filter::is_valid(record, today()))
                .map(serde_json::to_value)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            info!("{} of {} normalized events are valid", kept.len(), normalized);
            kept
        }
        // Early feed version: items pass through untouched apart from key
        // renaming, and nothing is filtered.
        None => items.iter().map(normalize::rename_keys).collect(),
    };

    Ok(entries)
}
