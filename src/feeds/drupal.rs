use crate::constants::{DRUPAL_ENDPOINT, DRUPAL_FEED, DRUPAL_PAGE_SIZE};
use crate::error::{Result, ScraperError};
use crate::feeds::{format_url, EventFeed, FieldMap};
use crate::types::RawItem;
use serde_json::Value;

/// Second feed version: a Drupal view exposed as JSON. Each page is a bare
/// array of items whose keys are the view's field labels, spaces included
/// ("Event Date", "Venue City", ...).
pub struct DrupalFeed;

/// Field names after renaming. The view labels carry spaces; the normalizer
/// sees them with underscores.
pub static DRUPAL_FIELDS: FieldMap = FieldMap {
    event_name: "Title",
    description: "Body",
    date_range: "Event_Date",
    fee: "Fee",
    registration_url: "Registration_URL",
    event_cancelled: "Event_Cancelled",
    venue_city: "Venue_City",
    venue_country: "Venue_Country",
    venue_street: "Venue_Street",
    location_name: "Location_Name",
    province: "Province",
    postal_code: "Postal_Code",
    contact_name: "Contact_Name",
    registration_phone: "Registration_Phone",
    registration_email: "Registration_Email",
    agency: "Agency",
};

impl Default for DrupalFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl DrupalFeed {
    pub fn new() -> Self {
        Self
    }
}

impl EventFeed for DrupalFeed {
    fn feed_name(&self) -> &'static str {
        DRUPAL_FEED
    }

    fn endpoint(&self) -> &'static str {
        DRUPAL_ENDPOINT
    }

    fn initial_offset(&self) -> u64 {
        0
    }

    fn offset_step(&self) -> u64 {
        DRUPAL_PAGE_SIZE
    }

    fn page_url(&self, offset: u64) -> String {
        format_url(DRUPAL_ENDPOINT, offset, DRUPAL_PAGE_SIZE)
    }

    fn parse_page(&self, body: &[u8]) -> Result<Vec<RawItem>> {
        let page: Value = serde_json::from_slice(body)?;
        match page {
            Value::Array(items) => Ok(items),
            _ => Err(ScraperError::Api {
                message: "drupal page is not a JSON array".to_string(),
            }),
        }
    }

    fn field_map(&self) -> Option<&'static FieldMap> {
        Some(&DRUPAL_FIELDS)
    }
}
