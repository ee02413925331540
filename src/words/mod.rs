//! Amount-to-words for the legal amount line on printed documents.
//!
//! Place-value grouping is data, not code: a [`NumberingSystem`] is a list
//! of `(divisor, name)` tiers. [`NumberingSystem::indian`] groups by
//! thousand, lakh (10^5) and crore (10^7); [`NumberingSystem::western`] by
//! thousand, million, billion and trillion.
//!
//! # Example
//!
//! ```
//! use bijak::words::*;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(to_words(dec!(100000)).unwrap(), "One Lakh Rupees");
//!
//! let usd = AmountWords::western(CurrencyWords::new("Dollars", "Cents")).unwrap();
//! assert_eq!(usd.to_words(dec!(100000)).unwrap(), "One Hundred Thousand Dollars");
//! ```

mod amount;
mod system;

pub use amount::{AmountWords, CurrencyWords, MAX_MINOR_DIGITS, to_words};
pub use system::{NumberingSystem, Tier};
