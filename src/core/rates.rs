//! Permitted tax rates.
//!
//! A rate table is the closed set of combined percentages a line may carry.
//! Rates outside the table are rejected with a [`ValidationError`]; they are
//! never clamped to the nearest permitted value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::{InvalidInputError, ValidationError};
use super::types::TaxRates;

/// Indian GST slab rates (combined percentage).
pub const GST_RATES: [Decimal; 6] = [dec!(0), dec!(3), dec!(5), dec!(12), dec!(18), dec!(28)];

/// Closed set of permitted combined percentage rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Decimal>", into = "Vec<Decimal>")]
pub struct RateTable {
    rates: Vec<Decimal>,
}

impl RateTable {
    /// Build a table from arbitrary rates. Each rate must lie in `[0, 100]`.
    /// Duplicates (by value, so `18` and `18.00` are one rate) are merged.
    pub fn new(rates: impl IntoIterator<Item = Decimal>) -> Result<Self, InvalidInputError> {
        let mut rates: Vec<Decimal> = rates.into_iter().map(|r| r.normalize()).collect();
        if let Some(bad) = rates
            .iter()
            .find(|r| **r < Decimal::ZERO || **r > dec!(100))
        {
            return Err(InvalidInputError::new(
                "rate_table",
                format!("rate {bad} is outside 0..=100"),
            ));
        }
        rates.sort();
        rates.dedup();
        Ok(Self { rates })
    }

    /// The GST slabs `{0, 3, 5, 12, 18, 28}`.
    pub fn gst() -> Self {
        Self {
            rates: GST_RATES.to_vec(),
        }
    }

    /// Permitted rates, ascending.
    pub fn rates(&self) -> &[Decimal] {
        &self.rates
    }

    pub fn contains(&self, rate: Decimal) -> bool {
        self.rates.binary_search(&rate).is_ok()
    }

    /// Reject a rate that is not in the table.
    pub fn validate(&self, field: &str, rate: Decimal) -> Result<(), ValidationError> {
        if self.contains(rate) {
            return Ok(());
        }
        Err(ValidationError::with_allowed(
            field,
            format!("rate {}% is not a permitted rate", rate.normalize()),
            self.allowed_list(),
        ))
    }

    /// Reject a set of components whose slab rate is not in the table.
    ///
    /// CGST 9 + SGST 9 and IGST 18 both resolve to the 18% slab. Cess and
    /// other [`ADDITIONAL_LEVIES`](super::types::ADDITIONAL_LEVIES) sit on
    /// top of the slab and are only range-checked by the calculator.
    pub fn validate_combined(&self, field: &str, rates: &TaxRates) -> Result<(), ValidationError> {
        self.validate(field, rates.slab_rate())
    }

    fn allowed_list(&self) -> String {
        self.rates
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::gst()
    }
}

impl TryFrom<Vec<Decimal>> for RateTable {
    type Error = InvalidInputError;

    fn try_from(rates: Vec<Decimal>) -> Result<Self, Self::Error> {
        Self::new(rates)
    }
}

impl From<RateTable> for Vec<Decimal> {
    fn from(table: RateTable) -> Self {
        table.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CESS, CGST, IGST, SGST};

    #[test]
    fn gst_slabs() {
        let table = RateTable::gst();
        for r in [dec!(0), dec!(3), dec!(5), dec!(12), dec!(18), dec!(28)] {
            assert!(table.contains(r), "{r} should be permitted");
        }
        assert!(!table.contains(dec!(7)));
        assert!(!table.contains(dec!(19)));
    }

    #[test]
    fn scale_does_not_matter() {
        assert!(RateTable::gst().contains(dec!(18.00)));
    }

    #[test]
    fn unlisted_rate_is_validation_error() {
        let err = RateTable::gst().validate("rate", dec!(20)).unwrap_err();
        assert_eq!(err.field, "rate");
        assert!(err.message.contains("20"));
        assert_eq!(err.allowed.as_deref(), Some("0, 3, 5, 12, 18, 28"));
    }

    #[test]
    fn split_components_resolve_to_slab() {
        let table = RateTable::gst();
        let intra = TaxRates::new().with(CGST, dec!(9)).with(SGST, dec!(9));
        let inter = TaxRates::new().with(IGST, dec!(18));
        assert!(table.validate_combined("rates", &intra).is_ok());
        assert!(table.validate_combined("rates", &inter).is_ok());

        let off = TaxRates::new().with(CGST, dec!(10)).with(SGST, dec!(10));
        assert!(table.validate_combined("rates", &off).is_err());
    }

    #[test]
    fn cess_does_not_count_toward_the_slab() {
        let table = RateTable::gst();
        let with_cess = TaxRates::new()
            .with(CGST, dec!(14))
            .with(SGST, dec!(14))
            .with(CESS, dec!(12));
        assert!(table.validate_combined("rates", &with_cess).is_ok());

        let off_slab = TaxRates::new().with(IGST, dec!(20)).with(CESS, dec!(8));
        assert!(table.validate_combined("rates", &off_slab).is_err());
    }

    #[test]
    fn custom_table_sorted_and_deduplicated() {
        let table = RateTable::new([dec!(19), dec!(7), dec!(0), dec!(7.00)]).unwrap();
        assert_eq!(table.rates(), &[dec!(0), dec!(7), dec!(19)]);
    }

    #[test]
    fn custom_table_rejects_out_of_range() {
        assert!(RateTable::new([dec!(-1)]).is_err());
        assert!(RateTable::new([dec!(100.5)]).is_err());
        assert!(RateTable::new([dec!(100)]).is_ok());
    }
}
