use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::system::NumberingSystem;
use crate::core::InvalidInputError;

/// Currency unit names used when spelling an amount.
///
/// The plural names are used unless a singular is configured and the
/// count is exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyWords {
    /// Major unit, e.g. "Rupees".
    pub major: String,
    /// Minor unit, e.g. "Paise".
    pub minor: String,
    /// Major unit for a count of one, e.g. "Rupee".
    #[serde(default)]
    pub major_singular: Option<String>,
    /// Minor unit for a count of one, e.g. "Paisa".
    #[serde(default)]
    pub minor_singular: Option<String>,
    /// Number of minor-unit digits (2 for paise/cents).
    #[serde(default = "default_minor_digits")]
    pub minor_digits: u32,
    /// Appended after everything else, e.g. "Only".
    #[serde(default)]
    pub suffix: Option<String>,
}

fn default_minor_digits() -> u32 {
    2
}

impl CurrencyWords {
    pub fn new(major: impl Into<String>, minor: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
            major_singular: None,
            minor_singular: None,
            minor_digits: 2,
            suffix: None,
        }
    }

    /// Indian rupees and paise ("One Rupee", "One Paisa").
    pub fn rupees() -> Self {
        Self::new("Rupees", "Paise").with_singular("Rupee", "Paisa")
    }

    pub fn with_singular(mut self, major: impl Into<String>, minor: impl Into<String>) -> Self {
        self.major_singular = Some(major.into());
        self.minor_singular = Some(minor.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_minor_digits(mut self, digits: u32) -> Self {
        self.minor_digits = digits;
        self
    }
}

/// Amount-to-words formatter: a numbering system plus currency names.
///
/// ```
/// use bijak::words::*;
/// use rust_decimal_macros::dec;
///
/// let words = AmountWords::indian_rupees();
/// assert_eq!(
///     words.to_words(dec!(1250.50)).unwrap(),
///     "One Thousand Two Hundred and Fifty Rupees and Fifty Paise"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AmountWordsConfig")]
pub struct AmountWords {
    system: NumberingSystem,
    currency: CurrencyWords,
}

/// Unvalidated form of [`AmountWords`] as it appears in configuration.
#[derive(Deserialize)]
struct AmountWordsConfig {
    system: NumberingSystem,
    currency: CurrencyWords,
}

impl TryFrom<AmountWordsConfig> for AmountWords {
    type Error = InvalidInputError;

    fn try_from(config: AmountWordsConfig) -> Result<Self, Self::Error> {
        Self::new(config.system, config.currency)
    }
}

/// Largest supported minor-unit digit count.
pub const MAX_MINOR_DIGITS: u32 = 6;

impl AmountWords {
    pub fn new(
        system: NumberingSystem,
        currency: CurrencyWords,
    ) -> Result<Self, InvalidInputError> {
        if currency.minor_digits > MAX_MINOR_DIGITS {
            return Err(InvalidInputError::new(
                "currency.minor_digits",
                format!(
                    "{} minor digits requested, at most {MAX_MINOR_DIGITS} supported",
                    currency.minor_digits
                ),
            ));
        }
        Ok(Self { system, currency })
    }

    /// Indian grouping with rupees and paise.
    pub fn indian_rupees() -> Self {
        Self {
            system: NumberingSystem::indian(),
            currency: CurrencyWords::rupees(),
        }
    }

    pub fn system(&self) -> &NumberingSystem {
        &self.system
    }

    pub fn currency(&self) -> &CurrencyWords {
        &self.currency
    }

    /// Western grouping with the given currency names.
    pub fn western(currency: CurrencyWords) -> Result<Self, InvalidInputError> {
        Self::new(NumberingSystem::western(), currency)
    }

    /// Spell out a non-negative amount.
    ///
    /// The amount is first rounded half-up to the currency's minor digits.
    /// Zero is `"Zero"`; a zero minor part is omitted; otherwise the minor
    /// part follows as `"and <words> <minor>"`.
    pub fn to_words(&self, amount: Decimal) -> Result<String, InvalidInputError> {
        if amount < Decimal::ZERO {
            return Err(InvalidInputError::new(
                "amount",
                format!("must not be negative, got {amount}"),
            ));
        }
        let digits = self.currency.minor_digits;
        let rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        let major_part = rounded.trunc();
        let minor_part = (rounded - major_part) * Decimal::from(10u64.pow(digits));

        let major = major_part
            .to_u128()
            .ok_or_else(|| InvalidInputError::overflow("amount"))?;
        let minor = minor_part
            .trunc()
            .to_u128()
            .ok_or_else(|| InvalidInputError::overflow("amount"))?;

        if major == 0 && minor == 0 {
            return Ok("Zero".to_string());
        }

        let mut words: Vec<&str> = Vec::new();
        let currency = &self.currency;
        if major > 0 {
            self.system.push_integer(major, &mut words);
            words.push(unit_name(major, &currency.major, &currency.major_singular));
        }
        if minor > 0 {
            if major > 0 {
                words.push("and");
            }
            self.system.push_integer(minor, &mut words);
            words.push(unit_name(minor, &currency.minor, &currency.minor_singular));
        }
        if let Some(suffix) = &self.currency.suffix {
            words.push(suffix);
        }
        Ok(words.join(" "))
    }
}

fn unit_name<'a>(count: u128, plural: &'a str, singular: &'a Option<String>) -> &'a str {
    match singular {
        Some(one) if count == 1 => one.as_str(),
        _ => plural,
    }
}

impl Default for AmountWords {
    fn default() -> Self {
        Self::indian_rupees()
    }
}

/// Spell out an amount in Indian rupees and paise.
///
/// ```
/// use bijak::words::to_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(to_words(dec!(100)).unwrap(), "One Hundred Rupees");
/// assert_eq!(to_words(dec!(0)).unwrap(), "Zero");
/// ```
pub fn to_words(amount: Decimal) -> Result<String, InvalidInputError> {
    AmountWords::indian_rupees().to_words(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero() {
        assert_eq!(to_words(dec!(0)).unwrap(), "Zero");
        assert_eq!(to_words(dec!(0.00)).unwrap(), "Zero");
        assert_eq!(to_words(dec!(0.004)).unwrap(), "Zero");
    }

    #[test]
    fn whole_rupees_omit_paise() {
        assert_eq!(to_words(dec!(100)).unwrap(), "One Hundred Rupees");
        assert_eq!(to_words(dec!(100.00)).unwrap(), "One Hundred Rupees");
        assert_eq!(to_words(dec!(1)).unwrap(), "One Rupee");
        assert_eq!(to_words(dec!(101)).unwrap(), "One Hundred and One Rupees");
    }

    #[test]
    fn paise_clause() {
        assert_eq!(
            to_words(dec!(1250.50)).unwrap(),
            "One Thousand Two Hundred and Fifty Rupees and Fifty Paise"
        );
        assert_eq!(to_words(dec!(10.05)).unwrap(), "Ten Rupees and Five Paise");
    }

    #[test]
    fn paise_only() {
        assert_eq!(to_words(dec!(0.75)).unwrap(), "Seventy Five Paise");
    }

    #[test]
    fn rounds_before_splitting() {
        assert_eq!(to_words(dec!(10.005)).unwrap(), "Ten Rupees and One Paisa");
        assert_eq!(to_words(dec!(0.999)).unwrap(), "One Rupee");
        assert_eq!(to_words(dec!(99.995)).unwrap(), "One Hundred Rupees");
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(to_words(dec!(99999)).unwrap(), "Ninety Nine Thousand Nine Hundred and Ninety Nine Rupees");
        assert_eq!(to_words(dec!(100000)).unwrap(), "One Lakh Rupees");
        assert_eq!(to_words(dec!(9999999)).unwrap(), "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred and Ninety Nine Rupees");
        assert_eq!(to_words(dec!(10000000)).unwrap(), "One Crore Rupees");
    }

    #[test]
    fn negative_rejected() {
        let err = to_words(dec!(-1)).unwrap_err();
        assert_eq!(err.field, "amount");
        assert!(to_words(dec!(-0.01)).is_err());
    }

    #[test]
    fn western_dollars_with_suffix() {
        let words = AmountWords::western(
            CurrencyWords::new("Dollars", "Cents")
                .with_singular("Dollar", "Cent")
                .with_suffix("Only"),
        )
        .unwrap();
        assert_eq!(
            words.to_words(dec!(1250000.01)).unwrap(),
            "One Million Two Hundred and Fifty Thousand Dollars and One Cent Only"
        );
        assert_eq!(words.to_words(dec!(1.5)).unwrap(), "One Dollar and Fifty Cents Only");
    }

    #[test]
    fn three_minor_digits() {
        let words = AmountWords::new(
            NumberingSystem::western(),
            CurrencyWords::new("Dinars", "Fils").with_minor_digits(3),
        )
        .unwrap();
        assert_eq!(words.to_words(dec!(5.125)).unwrap(), "Five Dinars and One Hundred and Twenty Five Fils");
    }

    #[test]
    fn too_many_minor_digits_rejected() {
        let currency = CurrencyWords::rupees().with_minor_digits(7);
        assert!(AmountWords::new(NumberingSystem::indian(), currency).is_err());
    }

    #[test]
    fn largest_decimal_is_spelled() {
        let words = to_words(Decimal::MAX).unwrap();
        assert!(words.ends_with("Rupees"));
    }

    #[test]
    fn plural_only_currency_stays_plural() {
        let words = AmountWords::western(CurrencyWords::new("Dollars", "Cents")).unwrap();
        assert_eq!(words.to_words(dec!(1.01)).unwrap(), "One Dollars and One Cents");
    }

    #[test]
    fn deserialized_formatter_is_validated() {
        let json = r#"{
            "system": [{"divisor": 1000, "name": "Thousand"}],
            "currency": {"major": "Rupees", "minor": "Paise", "minor_digits": 20}
        }"#;
        let err = serde_json::from_str::<AmountWords>(json).unwrap_err();
        assert!(err.to_string().contains("minor digits"));
    }
}
