//! # US State Normalization
//!
//! Search providers return either "CA" or "California". Everything downstream
//! of ingestion works with the 2-letter USPS code only.

/// USPS code and full name for every state, DC and inhabited territory.
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
    ("AS", "American Samoa"),
    ("GU", "Guam"),
    ("MP", "Northern Mariana Islands"),
    ("PR", "Puerto Rico"),
    ("VI", "U.S. Virgin Islands"),
];

/// Map a state name or abbreviation to its USPS code.
///
/// Matching is case-insensitive and ignores surrounding and repeated inner
/// whitespace. Returns `None` for anything not in [`US_STATES`].
pub fn normalize_state(raw: &str) -> Option<&'static str> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return None;
    }

    if collapsed.len() == 2 {
        return US_STATES
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(&collapsed))
            .map(|(code, _)| *code);
    }

    US_STATES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(&collapsed))
        .map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_abbreviation_passthrough() {
        assert_eq!(normalize_state("CA"), Some("CA"));
        assert_eq!(normalize_state("ca"), Some("CA"));
        assert_eq!(normalize_state(" ny "), Some("NY"));
    }

    #[test]
    fn test_full_names() {
        assert_eq!(normalize_state("California"), Some("CA"));
        assert_eq!(normalize_state("new   york"), Some("NY"));
        assert_eq!(normalize_state("District of Columbia"), Some("DC"));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(normalize_state(""), None);
        assert_eq!(normalize_state("ZZ"), None);
        assert_eq!(normalize_state("Cali"), None);
        assert_eq!(normalize_state("Carolina"), None);
    }

    proptest! {
        #[test]
        fn prop_every_known_name_maps_to_its_code(index in 0usize..US_STATES.len()) {
            let (code, name) = US_STATES[index];
            prop_assert_eq!(normalize_state(name), Some(code));
            prop_assert_eq!(normalize_state(&name.to_uppercase()), Some(code));
            prop_assert_eq!(normalize_state(&code.to_lowercase()), Some(code));
        }
    }
}
