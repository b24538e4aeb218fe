pub mod drupal;
pub mod search_api;
pub mod xml;

use crate::constants::*;
use crate::error::Result;
use crate::types::RawItem;

pub use drupal::DrupalFeed;
pub use search_api::SearchApiFeed;
pub use xml::XmlFeed;

/// Source field names for one feed version, keyed after space->underscore
/// renaming has been applied to the raw item.
pub struct FieldMap {
    pub event_name: &'static str,
    pub description: &'static str,
    pub date_range: &'static str,
    pub fee: &'static str,
    pub registration_url: &'static str,
    pub event_cancelled: &'static str,
    pub venue_city: &'static str,
    pub venue_country: &'static str,
    pub venue_street: &'static str,
    pub location_name: &'static str,
    pub province: &'static str,
    pub postal_code: &'static str,
    pub contact_name: &'static str,
    pub registration_phone: &'static str,
    pub registration_email: &'static str,
    pub agency: &'static str,
}

/// One historical version of the upstream events feed.
///
/// A feed knows how to address a page, how to unwrap that page's envelope
/// into raw items, and which source fields the normalizer should read.
pub trait EventFeed: Send + Sync {
    /// Short identifier used in CLI arguments and status strings.
    fn feed_name(&self) -> &'static str;

    /// Endpoint template, reported verbatim in the "nothing to publish"
    /// status string.
    fn endpoint(&self) -> &'static str;

    /// Offset of the first page.
    fn initial_offset(&self) -> u64;

    /// How far the offset advances per fetched page.
    fn offset_step(&self) -> u64;

    /// Concrete URL for the page at `offset`.
    fn page_url(&self, offset: u64) -> String;

    /// Unwrap one page body into raw items. An empty vec means the feed is
    /// exhausted.
    fn parse_page(&self, body: &[u8]) -> Result<Vec<RawItem>>;

    /// Field mapping for full normalization, or `None` for the early feed
    /// version whose items are published as-is after key renaming.
    fn field_map(&self) -> Option<&'static FieldMap>;
}

/// Factory for feed implementations by user-facing name.
pub fn create_feed(feed_name: &str) -> Option<Box<dyn EventFeed>> {
    match feed_name {
        SEARCH_API_FEED => Some(Box::new(SearchApiFeed::new())),
        DRUPAL_FEED => Some(Box::new(DrupalFeed::new())),
        XML_FEED => Some(Box::new(XmlFeed::new())),
        _ => None,
    }
}

/// Feed selected via `SBA_FEED_VERSION`, defaulting to the current (XML)
/// version of the upstream feed.
pub fn from_env() -> Box<dyn EventFeed> {
    let name = std::env::var("SBA_FEED_VERSION").unwrap_or_else(|_| XML_FEED.to_string());
    create_feed(&name).unwrap_or_else(|| Box::new(XmlFeed::new()))
}

pub(crate) fn format_url(template: &str, offset: u64, limit: u64) -> String {
    template
        .replace("{offset}", &offset.to_string())
        .replace("{limit}", &limit.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_feed_by_name() {
        assert_eq!(
            create_feed(SEARCH_API_FEED).unwrap().feed_name(),
            SEARCH_API_FEED
        );
        assert_eq!(create_feed(DRUPAL_FEED).unwrap().feed_name(), DRUPAL_FEED);
        assert_eq!(create_feed(XML_FEED).unwrap().feed_name(), XML_FEED);
        assert!(create_feed("rss2").is_none());
    }

    #[test]
    fn test_format_url() {
        assert_eq!(
            format_url("https://example.gov/api?offset={offset}&limit={limit}", 40, 20),
            "https://example.gov/api?offset=40&limit=20"
        );
    }
}
