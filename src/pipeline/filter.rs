use crate::constants::CANCELLED_SENTINEL;
use crate::types::TradeEvent;
use chrono::NaiveDate;

/// Validity predicate for the published collection: the event must start
/// strictly after `today`, must not be cancelled, and must have a venue
/// with a country.
///
/// `start_date` is an ISO `YYYY-MM-DD` string, so lexicographic comparison
/// is chronological comparison.
pub fn is_valid(record: &TradeEvent, today: NaiveDate) -> bool {
    let today = today.format("%Y-%m-%d").to_string();
    record.start_date > today
        && record.event_cancelled != CANCELLED_SENTINEL
        && record
            .venues
            .first()
            .map(|v| !v.country.is_empty())
            .unwrap_or(false)
}
