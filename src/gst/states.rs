//! GST state and union-territory codes.
//!
//! The first two digits of a GSTIN, and the code used for place of supply.

/// Look up the state or union territory for a two-digit GST code.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATE_CODES
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| STATE_CODES[i].1)
}

/// Check whether `code` is a known GST state code.
pub fn is_known_state_code(code: &str) -> bool {
    state_name(code).is_some()
}

/// All known codes with their names.
pub fn state_codes() -> &'static [(&'static str, &'static str)] {
    STATE_CODES
}

/// Sorted by code for binary search.
static STATE_CODES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states() {
        assert_eq!(state_name("27"), Some("Maharashtra"));
        assert_eq!(state_name("29"), Some("Karnataka"));
        assert_eq!(state_name("07"), Some("Delhi"));
        assert!(is_known_state_code("38"));
    }

    #[test]
    fn unknown_states() {
        assert!(!is_known_state_code("25"));
        assert!(!is_known_state_code("28"));
        assert!(!is_known_state_code("7"));
        assert!(!is_known_state_code(""));
    }

    #[test]
    fn list_is_sorted() {
        for window in STATE_CODES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "state codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }
}
