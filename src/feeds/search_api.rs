use crate::constants::{SEARCH_API_ENDPOINT, SEARCH_API_FEED, SEARCH_API_PAGE_SIZE};
use crate::error::{Result, ScraperError};
use crate::feeds::{format_url, EventFeed, FieldMap};
use crate::types::RawItem;
use serde_json::Value;

/// Earliest feed version: the site-wide content search API. Pages are JSON
/// objects carrying their items in an `items` array. Items from this feed
/// are published as-is after key renaming; there is no canonical-record
/// normalization and no validity filtering.
pub struct SearchApiFeed;

impl Default for SearchApiFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchApiFeed {
    pub fn new() -> Self {
        Self
    }
}

impl EventFeed for SearchApiFeed {
    fn feed_name(&self) -> &'static str {
        SEARCH_API_FEED
    }

    fn endpoint(&self) -> &'static str {
        SEARCH_API_ENDPOINT
    }

    fn initial_offset(&self) -> u64 {
        0
    }

    fn offset_step(&self) -> u64 {
        SEARCH_API_PAGE_SIZE
    }

    fn page_url(&self, offset: u64) -> String {
        format_url(SEARCH_API_ENDPOINT, offset, SEARCH_API_PAGE_SIZE)
    }

    fn parse_page(&self, body: &[u8]) -> Result<Vec<RawItem>> {
        let envelope: Value = serde_json::from_slice(body)?;
        let items = envelope
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| ScraperError::Api {
                message: "search API page has no items array".to_string(),
            })?;
        Ok(items.clone())
    }

    fn field_map(&self) -> Option<&'static FieldMap> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_page_unwraps_items() {
        let feed = SearchApiFeed::new();
        let body = json!({
            "total": 1078,
            "items": [
                {"title": "Export University", "cost": "39.00"},
                {"title": "Small Business Expo", "cost": "0.00"}
            ]
        });
        let items = feed.parse_page(body.to_string().as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["cost"], "39.00");
    }

    #[test]
    fn test_parse_page_empty_items_terminates() {
        let feed = SearchApiFeed::new();
        let items = feed.parse_page(br#"{"items": []}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_page_missing_items_is_error() {
        let feed = SearchApiFeed::new();
        assert!(feed.parse_page(br#"{"total": 0}"#).is_err());
    }

    #[test]
    fn test_parse_page_malformed_body_is_error() {
        let feed = SearchApiFeed::new();
        assert!(feed.parse_page(b"<html>gateway timeout</html>").is_err());
    }

    #[test]
    fn test_page_url_substitutes_offset() {
        let feed = SearchApiFeed::new();
        assert_eq!(
            feed.page_url(30),
            "https://www.sba.gov/api/content/search/events.json?start=30"
        );
    }
}
