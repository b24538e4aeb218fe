/// Feed and publishing constants shared across the codebase.

// User-facing feed names (used in CLI and status strings)
pub const SEARCH_API_FEED: &str = "search-api";
pub const DRUPAL_FEED: &str = "drupal";
pub const XML_FEED: &str = "xml";

// Endpoint templates. `{offset}` is the running pagination offset;
// `{limit}` is the page size for feeds that support it.
pub const SEARCH_API_ENDPOINT: &str =
    "https://www.sba.gov/api/content/search/events.json?start={offset}";
pub const DRUPAL_ENDPOINT: &str =
    "https://www.sba.gov/api/content/event-list.json?offset={offset}&limit={limit}";
pub const XML_ENDPOINT: &str =
    "https://www.sba.gov/api/content/events.xml?offset={offset}&limit={limit}";

// Page sizes are dictated by the upstream feed, not tunable.
pub const SEARCH_API_PAGE_SIZE: u64 = 10;
pub const DRUPAL_PAGE_SIZE: u64 = 20;
pub const XML_PAGE_SIZE: u64 = 50;

// The XML feed carries the full historical archive; starting deep into it
// skips entries that can never pass the validity filter anyway.
pub const XML_INITIAL_OFFSET: u64 = 3000;

// The upstream never signals "last page" except by returning an empty one.
// If it never does, give up rather than loop forever.
pub const MAX_PAGES: usize = 1000;

// Value of the cancellation field that marks an event as cancelled.
pub const CANCELLED_SENTINEL: &str = "Yes";

// Published artifact location.
pub const BUCKET: &str = "trade-events";
pub const OBJECT_KEY: &str = "sba.json";

/// Bucket name, overridable for staging runs.
pub fn bucket() -> String {
    std::env::var("SBA_BUCKET").unwrap_or_else(|_| BUCKET.to_string())
}

/// Object key within the bucket.
pub fn object_key() -> String {
    std::env::var("SBA_OBJECT_KEY").unwrap_or_else(|_| OBJECT_KEY.to_string())
}
