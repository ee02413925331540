use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::{BijakError, InvalidInputError};
use super::rates::RateTable;
use super::types::{LineItem, LineItemInput, TaxRates};

const HUNDRED: Decimal = dec!(100);

/// Compute one line item from its raw inputs.
///
/// `taxable = quantity * unit_price - discount` and each component's tax is
/// `taxable * rate / 100`. Nothing is rounded; presentation rounding belongs
/// to [`round_money`](super::money::round_money).
///
/// ```
/// use bijak::core::*;
/// use rust_decimal_macros::dec;
///
/// let rates = TaxRates::new().with(CGST, dec!(9)).with(SGST, dec!(9));
/// let item = compute_line_item(1, dec!(250), dec!(10), &rates).unwrap();
/// assert_eq!(item.taxable_amount(), dec!(240));
/// assert_eq!(item.tax_amount(CGST), dec!(21.6));
/// assert_eq!(item.total_amount(), dec!(283.2));
/// ```
pub fn compute_line_item(
    quantity: i64,
    unit_price: Decimal,
    discount: Decimal,
    rates: &TaxRates,
) -> Result<LineItem, InvalidInputError> {
    LineItemInput::new(quantity, unit_price)
        .discount(discount)
        .rates(rates.clone())
        .compute()
}

impl LineItemInput {
    /// Compute this row. Checks every precondition before producing anything.
    pub fn compute(&self) -> Result<LineItem, InvalidInputError> {
        if self.quantity < 0 {
            return Err(InvalidInputError::new(
                "quantity",
                format!("must not be negative, got {}", self.quantity),
            ));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(InvalidInputError::new(
                "unit_price",
                format!("must not be negative, got {}", self.unit_price),
            ));
        }
        if self.discount < Decimal::ZERO {
            return Err(InvalidInputError::new(
                "discount",
                format!("must not be negative, got {}", self.discount),
            ));
        }
        for (name, pct) in self.rates.iter() {
            if pct < Decimal::ZERO || pct > HUNDRED {
                return Err(InvalidInputError::new(
                    format!("rates.{name}"),
                    format!("percentage {pct} is outside 0..=100"),
                ));
            }
        }

        let gross = Decimal::from(self.quantity)
            .checked_mul(self.unit_price)
            .ok_or_else(|| InvalidInputError::overflow("unit_price"))?;
        if self.discount > gross {
            return Err(InvalidInputError::new(
                "discount",
                format!(
                    "discount {} exceeds quantity x unit price {}",
                    self.discount, gross
                ),
            ));
        }
        let taxable_amount = gross - self.discount;

        let mut tax_amounts = BTreeMap::new();
        let mut total_amount = taxable_amount;
        for (name, pct) in self.rates.iter() {
            let tax = taxable_amount
                .checked_mul(pct)
                .and_then(|v| v.checked_div(HUNDRED))
                .ok_or_else(|| InvalidInputError::overflow(format!("rates.{name}")))?;
            total_amount = total_amount
                .checked_add(tax)
                .ok_or_else(|| InvalidInputError::overflow("total_amount"))?;
            tax_amounts.insert(name.to_string(), tax);
        }

        Ok(LineItem::from_parts(
            self.clone(),
            taxable_amount,
            tax_amounts,
            total_amount,
        ))
    }
}

/// Line calculator bound to a rate table.
///
/// This is the checked entry point for user input: the combined rate of each
/// line must be in the table, on top of the numeric preconditions enforced
/// by [`LineItemInput::compute`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculator {
    rate_table: RateTable,
}

impl Calculator {
    pub fn new(rate_table: RateTable) -> Self {
        Self { rate_table }
    }

    /// Calculator using the GST slabs.
    pub fn gst() -> Self {
        Self::new(RateTable::gst())
    }

    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Validate and compute one line.
    pub fn compute(&self, input: &LineItemInput) -> Result<LineItem, BijakError> {
        let item = input.compute()?;
        self.rate_table.validate_combined("rates", &input.rates)?;
        Ok(item)
    }
}
