//! # bijak
//!
//! GST-style invoice arithmetic: multi-rate line items, document totals,
//! and the legal amount-in-words line for printed documents.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Running totals are kept unrounded; rounding to two places happens only
//! when an amount is presented.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use rust_decimal_macros::dec;
//!
//! let calc = Calculator::gst();
//! let lines = [
//!     LineItemInput::new(2, dec!(100))
//!         .rate(CGST, dec!(9))
//!         .rate(SGST, dec!(9)),
//!     LineItemInput::new(1, dec!(250))
//!         .discount(dec!(10))
//!         .rate(CGST, dec!(9))
//!         .rate(SGST, dec!(9)),
//! ];
//! let items = lines
//!     .iter()
//!     .map(|l| calc.compute(l))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let totals = aggregate(&items);
//! assert_eq!(totals.subtotal, dec!(440));
//! assert_eq!(totals.grand_total, dec!(519.20));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Rate table, line calculator, aggregation, documents, numbering |
//! | `words` | Amount-to-words with configurable numbering tiers (lakh/crore, million/billion) |
//! | `gst` | CGST/SGST/IGST split policy, state codes, GSTIN validation |
//! | `json` | JSON snapshots of finalized documents |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "words")]
pub mod words;

#[cfg(feature = "gst")]
pub mod gst;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
