//! Indian GST policy applied on top of the core calculator.
//!
//! Splits a slab rate into CGST/SGST or IGST depending on the place of
//! supply, checks the component rules, and validates GSTINs and state codes.
//!
//! # Example
//!
//! ```
//! use bijak::core::*;
//! use bijak::gst::*;
//! use rust_decimal_macros::dec;
//!
//! assert!(validate_gstin("27AAPFU0939F1ZV").is_ok());
//!
//! let supply = SupplyType::determine("27", "29");
//! assert_eq!(supply, SupplyType::InterState);
//!
//! let rates = split_rate(dec!(18), supply);
//! check_exclusivity(&rates).unwrap();
//!
//! let item = Calculator::gst()
//!     .compute(&LineItemInput::new(1, dec!(1000)).rates(rates))
//!     .unwrap();
//! assert_eq!(item.tax_amount(IGST), dec!(180));
//! ```

mod gstin;
mod states;
mod supply;

pub use gstin::{GstinError, GstinParts, validate_gstin};
pub use states::{is_known_state_code, state_codes, state_name};
pub use supply::{SupplyType, check_exclusivity, split_rate};
