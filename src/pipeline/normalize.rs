use crate::error::{Result, ScraperError};
use crate::feeds::FieldMap;
use crate::states::state_abbreviation;
use crate::types::{Contact, RawItem, TradeEvent, Venue};
use scraper::Html;
use serde_json::{Map, Value};

/// Map one raw feed item into the canonical record. Pure: one item in, one
/// record out, errors on malformed dates and unrecognized state names only.
pub fn normalize(item: &RawItem, fields: &FieldMap) -> Result<TradeEvent> {
    let item = rename_keys(item);

    let date_range = text_field(&item, fields.date_range);
    let (start_date, start_time, end_date, end_time) = split_date_range(&date_range)?;

    let province_name = text_field(&item, fields.province);
    let province = if province_name.is_empty() {
        String::new()
    } else {
        state_abbreviation(&province_name)?.to_string()
    };

    let venue = Venue {
        city: text_field(&item, fields.venue_city),
        country: text_field(&item, fields.venue_country),
        street: strip_tags(&text_field(&item, fields.venue_street)),
        location_name: text_field(&item, fields.location_name),
        province,
        postal_code: text_field(&item, fields.postal_code),
    };

    let contact = Contact {
        contact_name: text_field(&item, fields.contact_name),
        registration_phone: text_field(&item, fields.registration_phone),
        registration_email: text_field(&item, fields.registration_email),
        agency: text_field(&item, fields.agency),
    };

    Ok(TradeEvent {
        event_name: text_field(&item, fields.event_name),
        description: strip_tags(&text_field(&item, fields.description)),
        start_date,
        start_time,
        end_date,
        end_time,
        fee: parse_fee(&text_field(&item, fields.fee)),
        registration_url: text_field(&item, fields.registration_url),
        event_cancelled: text_field(&item, fields.event_cancelled),
        venues: vec![venue],
        contacts: vec![contact],
    })
}

/// Rename every key containing a space to its underscore form. Drupal view
/// labels like "Event Date" arrive this way; nothing else in an item is
/// touched.
pub fn rename_keys(item: &RawItem) -> RawItem {
    match item {
        Value::Object(map) => {
            let renamed: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.replace(' ', "_"), v.clone()))
                .collect();
            Value::Object(renamed)
        }
        other => other.clone(),
    }
}

/// Split the combined date/time range into its four components. The field
/// must hold exactly five whitespace-delimited tokens; the middle separator
/// token is discarded.
pub fn split_date_range(value: &str) -> Result<(String, String, String, String)> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.as_slice() {
        [start_date, start_time, _, end_date, end_time] => Ok((
            start_date.to_string(),
            start_time.to_string(),
            end_date.to_string(),
            end_time.to_string(),
        )),
        _ => Err(ScraperError::MalformedDateField {
            value: value.to_string(),
        }),
    }
}

/// Fee text as a number. Empty or non-numeric text means the event is free,
/// not that the item is broken.
pub fn parse_fee(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// Strip markup from a free-text field, leaving only text content.
pub fn strip_tags(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let fragment = Html::parse_fragment(value);
    fragment.root_element().text().collect::<String>()
}

fn text_field(item: &RawItem, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
