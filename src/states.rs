use crate::error::{Result, ScraperError};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// US state and territory names mapped to their postal abbreviations.
/// Lookups are exact: case- and whitespace-sensitive.
static STATE_ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Alabama", "AL"),
        ("Alaska", "AK"),
        ("Arizona", "AZ"),
        ("Arkansas", "AR"),
        ("California", "CA"),
        ("Colorado", "CO"),
        ("Connecticut", "CT"),
        ("Delaware", "DE"),
        ("Florida", "FL"),
        ("Georgia", "GA"),
        ("Hawaii", "HI"),
        ("Idaho", "ID"),
        ("Illinois", "IL"),
        ("Indiana", "IN"),
        ("Iowa", "IA"),
        ("Kansas", "KS"),
        ("Kentucky", "KY"),
        ("Louisiana", "LA"),
        ("Maine", "ME"),
        ("Maryland", "MD"),
        ("Massachusetts", "MA"),
        ("Michigan", "MI"),
        ("Minnesota", "MN"),
        ("Mississippi", "MS"),
        ("Missouri", "MO"),
        ("Montana", "MT"),
        ("Nebraska", "NE"),
        ("Nevada", "NV"),
        ("New Hampshire", "NH"),
        ("New Jersey", "NJ"),
        ("New Mexico", "NM"),
        ("New York", "NY"),
        ("North Carolina", "NC"),
        ("North Dakota", "ND"),
        ("Ohio", "OH"),
        ("Oklahoma", "OK"),
        ("Oregon", "OR"),
        ("Pennsylvania", "PA"),
        ("Rhode Island", "RI"),
        ("South Carolina", "SC"),
        ("South Dakota", "SD"),
        ("Tennessee", "TN"),
        ("Texas", "TX"),
        ("Utah", "UT"),
        ("Vermont", "VT"),
        ("Virginia", "VA"),
        ("Washington", "WA"),
        ("West Virginia", "WV"),
        ("Wisconsin", "WI"),
        ("Wyoming", "WY"),
        ("District of Columbia", "DC"),
        ("American Samoa", "AS"),
        ("Guam", "GU"),
        ("Northern Mariana Islands", "MP"),
        ("Puerto Rico", "PR"),
        ("U.S. Virgin Islands", "VI"),
    ])
});

/// Look up the postal abbreviation for a full state or territory name.
/// An unrecognized name is a hard error; the feed is expected to only ever
/// emit names from this table.
pub fn state_abbreviation(name: &str) -> Result<&'static str> {
    STATE_ABBREVIATIONS
        .get(name)
        .copied()
        .ok_or_else(|| ScraperError::UnknownStateName {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_abbreviation_known() {
        assert_eq!(state_abbreviation("Washington").unwrap(), "WA");
        assert_eq!(state_abbreviation("District of Columbia").unwrap(), "DC");
        assert_eq!(state_abbreviation("Puerto Rico").unwrap(), "PR");
    }

    #[test]
    fn test_state_abbreviation_is_exact_match() {
        // Lookup is case- and whitespace-sensitive.
        assert!(state_abbreviation("washington").is_err());
        assert!(state_abbreviation(" Washington").is_err());
        assert!(state_abbreviation("WA").is_err());
    }

    #[test]
    fn test_state_abbreviation_unknown_is_error() {
        let err = state_abbreviation("Narnia").unwrap_err();
        assert!(matches!(
            err,
            crate::error::ScraperError::UnknownStateName { .. }
        ));
    }
}
