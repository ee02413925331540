//! GSTIN (GST identification number) format validation.

use std::fmt;

use super::states::is_known_state_code;

const CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Error returned when a GSTIN fails format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GstinError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for GstinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GSTIN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for GstinError {}

/// The parts of a valid GSTIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GstinParts<'a> {
    /// Two-digit state code.
    pub state_code: &'a str,
    /// Ten-character PAN of the holder.
    pub pan: &'a str,
    /// Registration number for this PAN within the state (1-9, A-Z).
    pub entity: char,
    /// Mod-36 check character.
    pub checksum: char,
}

/// Validate a GSTIN by format and check character (no network call).
///
/// Layout: 2-digit state code, 10-character PAN (`AAAAA9999A`), entity
/// code, the letter `Z`, and a mod-36 check character. Input is trimmed
/// but must already be upper case.
pub fn validate_gstin(gstin: &str) -> Result<GstinParts<'_>, GstinError> {
    let gstin = gstin.trim();
    let fail = |reason: String| GstinError {
        value: gstin.into(),
        reason,
    };

    if gstin.len() != 15 || !gstin.is_ascii() {
        return Err(fail(format!(
            "must be 15 ASCII characters, got {}",
            gstin.chars().count()
        )));
    }
    let bytes = gstin.as_bytes();
    if let Some(c) = gstin
        .chars()
        .find(|c| !(c.is_ascii_digit() || c.is_ascii_uppercase()))
    {
        return Err(fail(format!("unexpected character '{c}'")));
    }

    let state_code = &gstin[..2];
    if !is_known_state_code(state_code) {
        return Err(fail(format!("unknown state code '{state_code}'")));
    }

    let pan = &gstin[2..12];
    if !is_pan_shape(pan) {
        return Err(fail(format!("'{pan}' is not a valid PAN")));
    }

    let entity = bytes[12] as char;
    if entity == '0' {
        return Err(fail("entity code must not be 0".into()));
    }
    if bytes[13] != b'Z' {
        return Err(fail(format!(
            "14th character must be 'Z', got '{}'",
            bytes[13] as char
        )));
    }

    let expected = check_character(&bytes[..14]);
    let checksum = bytes[14] as char;
    if checksum != expected {
        return Err(fail(format!(
            "check character '{checksum}' does not match expected '{expected}'"
        )));
    }

    Ok(GstinParts {
        state_code,
        pan,
        entity,
        checksum,
    })
}

/// Five letters, four digits, one letter.
fn is_pan_shape(pan: &str) -> bool {
    let b = pan.as_bytes();
    b.len() == 10
        && b[..5].iter().all(u8::is_ascii_uppercase)
        && b[5..9].iter().all(u8::is_ascii_digit)
        && b[9].is_ascii_uppercase()
}

/// Mod-36 check character over the first 14 characters.
///
/// Each character's index in `0-9A-Z` is weighted 1 and 2 alternately;
/// each product contributes `product / 36 + product % 36`.
fn check_character(body: &[u8]) -> char {
    let sum: usize = body
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let value = CHARSET.iter().position(|c| c == b).unwrap_or(0);
            let product = value * if i % 2 == 0 { 1 } else { 2 };
            product / 36 + product % 36
        })
        .sum();
    CHARSET[(36 - sum % 36) % 36] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_gstin() {
        let parts = validate_gstin("27AAPFU0939F1ZV").unwrap();
        assert_eq!(parts.state_code, "27");
        assert_eq!(parts.pan, "AAPFU0939F");
        assert_eq!(parts.entity, '1');
        assert_eq!(parts.checksum, 'V');
    }

    #[test]
    fn another_valid_gstin() {
        assert!(validate_gstin("29AAGCB7383J1Z4").is_ok());
        assert!(validate_gstin("  29AAGCB7383J1Z4 ").is_ok());
    }

    #[test]
    fn wrong_check_character() {
        let err = validate_gstin("27AAPFU0939F1ZW").unwrap_err();
        assert!(err.reason.contains("check character"));
    }

    #[test]
    fn wrong_length() {
        assert!(validate_gstin("27AAPFU0939F1Z").is_err());
        assert!(validate_gstin("").is_err());
    }

    #[test]
    fn lower_case_rejected() {
        assert!(validate_gstin("27aapfu0939f1zv").is_err());
    }

    #[test]
    fn unknown_state_rejected() {
        let err = validate_gstin("28AAPFU0939F1ZV").unwrap_err();
        assert!(err.reason.contains("state code"));
    }

    #[test]
    fn bad_pan_rejected() {
        let err = validate_gstin("27AAPF10939F1ZV").unwrap_err();
        assert!(err.reason.contains("PAN"));
    }

    #[test]
    fn missing_z_rejected() {
        let err = validate_gstin("27AAPFU0939F1YV").unwrap_err();
        assert!(err.reason.contains("'Z'"));
    }

    #[test]
    fn display() {
        let err = validate_gstin("X").unwrap_err();
        assert!(err.to_string().starts_with("invalid GSTIN 'X'"));
    }
}
