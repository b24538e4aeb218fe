use serde::{Deserialize, Serialize};

/// Raw event item as returned from a feed, one per discrete event/session.
/// XML feed items are flattened into objects of tag name -> text content.
pub type RawItem = serde_json::Value;

/// Venue sub-record. Only one venue is produced per event, but the feed
/// schema models it as a sequence, so we do too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub city: String,
    pub country: String,
    pub street: String,
    pub location_name: String,
    pub province: String,
    pub postal_code: String,
}

/// Contact sub-record, single-element sequence like `Venue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub contact_name: String,
    pub registration_phone: String,
    pub registration_email: String,
    pub agency: String,
}

/// Canonical trade event record published downstream.
///
/// `start_date`/`end_date` are ISO `YYYY-MM-DD` strings as supplied by the
/// feed; they are compared lexicographically by the validity filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEvent {
    pub event_name: String,
    pub description: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub fee: f64,
    pub registration_url: String,
    pub event_cancelled: String,
    pub venues: Vec<Venue>,
    pub contacts: Vec<Contact>,
}
