use super::error::InvalidInputError;
use super::types::{DocumentTotals, LineItem};

/// Sum computed line items into document totals.
///
/// An empty slice yields all-zero totals. The line items are trusted as
/// produced by the calculator; use
/// [`verify_line_item`](super::validation::verify_line_item) for an explicit
/// re-check. Decimal addition is exact, so the result does not depend on
/// the order of `items`.
///
/// # Panics
///
/// If a running total leaves the `Decimal` range (about 7.9 x 10^28).
/// Use [`try_aggregate`] for amounts that come from user input.
pub fn aggregate(items: &[LineItem]) -> DocumentTotals {
    items.iter().sum()
}

/// Like [`aggregate`], but a running total outside the `Decimal` range is an
/// [`InvalidInputError`] on field `totals` instead of a panic.
pub fn try_aggregate(items: &[LineItem]) -> Result<DocumentTotals, InvalidInputError> {
    items.iter().try_fold(DocumentTotals::zero(), |acc, item| {
        acc.checked_combine(&DocumentTotals::from_line(item))
            .ok_or_else(|| InvalidInputError::overflow("totals"))
    })
}
