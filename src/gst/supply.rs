//! Intra-state vs inter-state supply and the CGST/SGST/IGST split.
//!
//! The calculator treats rate components as an open set. The rules here
//! (equal halves for CGST/SGST, IGST exclusive with both) are caller-side
//! policy, applied before lines reach the calculator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{CGST, IGST, SGST, TaxRates, ValidationError};

/// Whether a supply stays within one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyType {
    /// Seller and place of supply in the same state: CGST + SGST.
    IntraState,
    /// Different states: IGST.
    InterState,
}

impl SupplyType {
    /// Determine the supply type from the seller's state code and the place
    /// of supply. Codes are compared after trimming.
    pub fn determine(seller_state: &str, place_of_supply: &str) -> Self {
        if seller_state.trim() == place_of_supply.trim() {
            Self::IntraState
        } else {
            Self::InterState
        }
    }
}

/// Split a combined GST rate into its components.
///
/// ```
/// use bijak::gst::*;
/// use bijak::core::{CGST, SGST};
/// use rust_decimal_macros::dec;
///
/// let rates = split_rate(dec!(18), SupplyType::IntraState);
/// assert_eq!(rates.get(CGST), Some(dec!(9)));
/// assert_eq!(rates.get(SGST), Some(dec!(9)));
/// ```
pub fn split_rate(combined: Decimal, supply: SupplyType) -> TaxRates {
    match supply {
        SupplyType::IntraState => {
            let half = combined / dec!(2);
            TaxRates::new().with(CGST, half).with(SGST, half)
        }
        SupplyType::InterState => TaxRates::new().with(IGST, combined),
    }
}

/// Check the GST component rules on a set of rates.
///
/// Rejects non-zero IGST alongside non-zero CGST or SGST, and CGST/SGST
/// that are not equal halves.
pub fn check_exclusivity(rates: &TaxRates) -> Result<(), ValidationError> {
    let cgst = rates.get(CGST).unwrap_or(Decimal::ZERO);
    let sgst = rates.get(SGST).unwrap_or(Decimal::ZERO);
    let igst = rates.get(IGST).unwrap_or(Decimal::ZERO);

    if !igst.is_zero() && (!cgst.is_zero() || !sgst.is_zero()) {
        return Err(ValidationError::new(
            "rates",
            format!("IGST {igst}% cannot be combined with CGST {cgst}% / SGST {sgst}%"),
        ));
    }
    if cgst != sgst {
        return Err(ValidationError::new(
            "rates",
            format!("CGST {cgst}% and SGST {sgst}% must be equal"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CESS;

    #[test]
    fn same_state_is_intra() {
        assert_eq!(SupplyType::determine("27", "27"), SupplyType::IntraState);
        assert_eq!(SupplyType::determine("27", " 27 "), SupplyType::IntraState);
        assert_eq!(SupplyType::determine("27", "29"), SupplyType::InterState);
    }

    #[test]
    fn inter_state_split() {
        let rates = split_rate(dec!(28), SupplyType::InterState);
        assert_eq!(rates.get(IGST), Some(dec!(28)));
        assert_eq!(rates.get(CGST), None);
        assert_eq!(rates.combined(), dec!(28));
    }

    #[test]
    fn odd_rate_halves_exactly() {
        let rates = split_rate(dec!(3), SupplyType::IntraState);
        assert_eq!(rates.get(CGST), Some(dec!(1.5)));
        assert_eq!(rates.combined(), dec!(3));
    }

    #[test]
    fn split_rates_pass_exclusivity() {
        for supply in [SupplyType::IntraState, SupplyType::InterState] {
            assert!(check_exclusivity(&split_rate(dec!(18), supply)).is_ok());
        }
    }

    #[test]
    fn igst_with_cgst_rejected() {
        let rates = TaxRates::new().with(IGST, dec!(18)).with(CGST, dec!(9));
        let err = check_exclusivity(&rates).unwrap_err();
        assert!(err.message.contains("IGST"));
    }

    #[test]
    fn unequal_halves_rejected() {
        let rates = TaxRates::new().with(CGST, dec!(9)).with(SGST, dec!(6));
        assert!(check_exclusivity(&rates).is_err());
    }

    #[test]
    fn zero_igst_component_is_ignored() {
        let rates = split_rate(dec!(12), SupplyType::IntraState).with(IGST, dec!(0));
        assert!(check_exclusivity(&rates).is_ok());
    }

    #[test]
    fn other_components_are_not_policed() {
        let rates = split_rate(dec!(28), SupplyType::InterState).with(CESS, dec!(12));
        assert!(check_exclusivity(&rates).is_ok());
    }
}
