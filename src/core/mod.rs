//! Core tax arithmetic, documents, and numbering.
//!
//! The calculator, aggregator, and rate table are pure functions over
//! immutable inputs. The document layer on top owns line items and decides
//! when stored totals become authoritative.

mod aggregate;
mod builder;
mod calculator;
mod document;
mod error;
pub mod money;
mod numbering;
mod rates;
mod types;
mod validation;

pub use aggregate::*;
pub use builder::*;
pub use calculator::*;
pub use document::*;
pub use error::*;
pub use money::{DigitGrouping, format_amount, round_money};
pub use numbering::*;
pub use rates::*;
pub use types::*;
pub use validation::*;
