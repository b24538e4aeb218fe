use crate::constants::MAX_PAGES;
use crate::error::{Result, ScraperError};
use crate::feeds::EventFeed;
use crate::infra::http::PageTransport;
use crate::types::RawItem;
use tracing::{info, instrument};

/// Walk the feed page by page from its initial offset until a page comes
/// back empty, accumulating items in fetch order.
///
/// The upstream has no "last page" marker, so an empty page is the only
/// terminal condition; `MAX_PAGES` bounds a feed that never drains. Any
/// transport or parse failure aborts the whole run.
#[instrument(skip(transport, feed), fields(feed_name = %feed.feed_name()))]
pub async fn fetch_all(
    transport: &dyn PageTransport,
    feed: &dyn EventFeed,
) -> Result<Vec<RawItem>> {
    let mut offset = feed.initial_offset();
    let mut items = Vec::new();

    for _ in 0..MAX_PAGES {
        let url = feed.page_url(offset);
        let body = transport.get(&url).await?;
        let batch = feed.parse_page(&body)?;
        info!("Found {} items from url {}", batch.len(), url);
        if batch.is_empty() {
            return Ok(items);
        }
        items.extend(batch);
        offset += feed.offset_step();
    }

    Err(ScraperError::PageLimitExceeded { pages: MAX_PAGES })
}
