use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Central GST component name.
pub const CGST: &str = "CGST";
/// State GST component name.
pub const SGST: &str = "SGST";
/// Integrated GST component name.
pub const IGST: &str = "IGST";
/// Compensation cess component name.
pub const CESS: &str = "CESS";

/// Components levied on top of the slab rate. They count toward the tax
/// amounts but not toward the rate checked against a [`RateTable`](super::rates::RateTable).
pub const ADDITIONAL_LEVIES: &[&str] = &[CESS];

/// Named percentage rate components applied to a taxable base.
///
/// The set is open: any component name may appear, and every component is
/// computed the same way. Components are kept sorted by name so iteration
/// and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRates(BTreeMap<String, Decimal>);

impl TaxRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a component.
    pub fn with(mut self, name: impl Into<String>, percentage: Decimal) -> Self {
        self.0.insert(name.into(), percentage);
        self
    }

    /// Percentage for a component, if present.
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.0.get(name).copied()
    }

    /// Iterate `(name, percentage)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all component percentages (the effective rate).
    pub fn combined(&self) -> Decimal {
        self.0.values().copied().sum()
    }

    /// Sum of the components that make up the slab rate, leaving out
    /// [`ADDITIONAL_LEVIES`] such as cess.
    pub fn slab_rate(&self) -> Decimal {
        self.iter()
            .filter(|(name, _)| !ADDITIONAL_LEVIES.contains(name))
            .map(|(_, pct)| pct)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for TaxRates {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// The raw inputs for one billable row.
///
/// Editing a row means building a new input and computing it again;
/// a computed [`LineItem`] is never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Units sold. Must not be negative.
    pub quantity: i64,
    /// Price per unit. Must not be negative.
    pub unit_price: Decimal,
    /// Flat discount on the row. Must not exceed `quantity * unit_price`.
    #[serde(default)]
    pub discount: Decimal,
    /// Tax rate components for the row.
    #[serde(default)]
    pub rates: TaxRates,
    /// Item description as printed.
    pub description: Option<String>,
    /// HSN (goods) or SAC (services) classification code.
    pub hsn_code: Option<String>,
    /// Unit of measure (e.g. "NOS", "KGS").
    pub unit: Option<String>,
}

impl LineItemInput {
    pub fn new(quantity: i64, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            discount: Decimal::ZERO,
            rates: TaxRates::new(),
            description: None,
            hsn_code: None,
            unit: None,
        }
    }

    pub fn discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    /// Add a single rate component.
    pub fn rate(mut self, name: impl Into<String>, percentage: Decimal) -> Self {
        self.rates = self.rates.with(name, percentage);
        self
    }

    /// Replace all rate components.
    pub fn rates(mut self, rates: TaxRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn hsn_code(mut self, code: impl Into<String>) -> Self {
        self.hsn_code = Some(code.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// A computed billable row.
///
/// Only the calculator produces line items; the derived amounts are
/// read-only. Deserializing a stored line item keeps its stored amounts
/// as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    input: LineItemInput,
    taxable_amount: Decimal,
    tax_amounts: BTreeMap<String, Decimal>,
    total_amount: Decimal,
}

impl LineItem {
    pub(crate) fn from_parts(
        input: LineItemInput,
        taxable_amount: Decimal,
        tax_amounts: BTreeMap<String, Decimal>,
        total_amount: Decimal,
    ) -> Self {
        Self {
            input,
            taxable_amount,
            tax_amounts,
            total_amount,
        }
    }

    /// The inputs this row was computed from.
    pub fn input(&self) -> &LineItemInput {
        &self.input
    }

    pub fn quantity(&self) -> i64 {
        self.input.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.input.unit_price
    }

    pub fn discount(&self) -> Decimal {
        self.input.discount
    }

    pub fn rates(&self) -> &TaxRates {
        &self.input.rates
    }

    /// `quantity * unit_price - discount`, unrounded.
    pub fn taxable_amount(&self) -> Decimal {
        self.taxable_amount
    }

    /// Tax per rate component, unrounded.
    pub fn tax_amounts(&self) -> &BTreeMap<String, Decimal> {
        &self.tax_amounts
    }

    /// Tax for one component; zero when the component is not applied.
    pub fn tax_amount(&self, name: &str) -> Decimal {
        self.tax_amounts.get(name).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of all component taxes.
    pub fn total_tax(&self) -> Decimal {
        self.tax_amounts.values().copied().sum()
    }

    /// `taxable_amount + total_tax`.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }
}

/// Document-level totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of line taxable amounts.
    pub subtotal: Decimal,
    /// Sum of line tax amounts per rate component.
    pub totals_by_rate: BTreeMap<String, Decimal>,
    /// Sum over all components.
    pub total_tax: Decimal,
    /// `subtotal + total_tax`.
    pub grand_total: Decimal,
}

impl DocumentTotals {
    /// All-zero totals (the totals of an empty document).
    pub fn zero() -> Self {
        Self::default()
    }

    /// Totals contributed by a single line.
    pub fn from_line(item: &LineItem) -> Self {
        Self {
            subtotal: item.taxable_amount(),
            totals_by_rate: item.tax_amounts().clone(),
            total_tax: item.total_tax(),
            grand_total: item.total_amount(),
        }
    }

    /// Summed tax for one component; zero when no line applied it.
    pub fn tax_for(&self, name: &str) -> Decimal {
        self.totals_by_rate.get(name).copied().unwrap_or(Decimal::ZERO)
    }

    /// Merge two partial totals. Associative and commutative, so partial
    /// totals may be reduced in any grouping or order.
    pub fn combine(mut self, other: &DocumentTotals) -> Self {
        self.subtotal += other.subtotal;
        for (name, amount) in &other.totals_by_rate {
            *self.totals_by_rate.entry(name.clone()).or_insert(Decimal::ZERO) += *amount;
        }
        self.total_tax += other.total_tax;
        self.grand_total += other.grand_total;
        self
    }

    /// [`combine`](Self::combine) that returns `None` instead of panicking
    /// when a sum leaves the `Decimal` range.
    pub fn checked_combine(&self, other: &DocumentTotals) -> Option<Self> {
        let mut totals_by_rate = self.totals_by_rate.clone();
        for (name, amount) in &other.totals_by_rate {
            let entry = totals_by_rate.entry(name.clone()).or_insert(Decimal::ZERO);
            *entry = entry.checked_add(*amount)?;
        }
        Some(Self {
            subtotal: self.subtotal.checked_add(other.subtotal)?,
            totals_by_rate,
            total_tax: self.total_tax.checked_add(other.total_tax)?,
            grand_total: self.grand_total.checked_add(other.grand_total)?,
        })
    }
}

impl Add for DocumentTotals {
    type Output = DocumentTotals;

    fn add(self, rhs: DocumentTotals) -> DocumentTotals {
        self.combine(&rhs)
    }
}

impl Sum for DocumentTotals {
    fn sum<I: Iterator<Item = DocumentTotals>>(iter: I) -> Self {
        iter.fold(DocumentTotals::zero(), |acc, t| acc.combine(&t))
    }
}

impl<'a> Sum<&'a LineItem> for DocumentTotals {
    fn sum<I: Iterator<Item = &'a LineItem>>(iter: I) -> Self {
        iter.fold(DocumentTotals::zero(), |acc, item| {
            acc.combine(&DocumentTotals::from_line(item))
        })
    }
}
